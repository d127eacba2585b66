//! CSV export of the link history.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::history::HistoryRecord;

/// Header row: the record's field names, unquoted.
const HEADER: &str = "data,link";

/// Export filename for `date`: `utm_YYYYMMDD.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("utm_{}.csv", date.format("%Y%m%d"))
}

/// Date used to name an export made now (UTC calendar day).
pub fn export_date() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Renders records as CSV text.
///
/// The header is `data,link`; every value is wrapped in double quotes with
/// inner quotes doubled; rows end with `\n`.
pub fn to_csv(records: &[HistoryRecord]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut out = Vec::with_capacity(HEADER.len() + 1 + records.len() * 64);
    out.extend_from_slice(HEADER.as_bytes());
    out.push(b'\n');

    {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);
        for record in records {
            wtr.write_record([record.data.as_str(), record.link.as_str()])?;
        }
        wtr.flush()?;
    }

    // Input fields are `String`s, so the output is valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Writes `records` to `dir/utm_YYYYMMDD.csv` and returns the file path.
pub fn export_to_dir(
    records: &[HistoryRecord],
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let csv = to_csv(records)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(date));
    std::fs::write(&path, csv)?;
    tracing::info!(path = %path.display(), rows = records.len(), "exported history");
    Ok(path)
}
