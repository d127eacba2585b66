//! History record and creation-date formatting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One generated link as stored in history.
///
/// Field names are the persisted JSON keys and the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Creation date, `dd/mm/yyyy` in the local calendar.
    pub data: String,
    pub link: String,
}

impl HistoryRecord {
    pub fn new(date: NaiveDate, link: impl Into<String>) -> Self {
        Self {
            data: format_creation_date(date),
            link: link.into(),
        }
    }

    /// Record dated today (local time).
    pub fn today(link: impl Into<String>) -> Self {
        Self::new(chrono::Local::now().date_naive(), link)
    }
}

/// Zero-padded `dd/mm/yyyy`.
pub fn format_creation_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_date_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_creation_date(d), "07/03/2024");
        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_creation_date(d), "31/12/2025");
    }

    #[test]
    fn json_keys_are_data_and_link() {
        let rec = HistoryRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "https://x.com?utm_source=a",
        );
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"data":"02/01/2024","link":"https://x.com?utm_source=a"}"#
        );
    }
}
