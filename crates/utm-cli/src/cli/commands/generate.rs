//! `utm generate` – compose tracking links and save them to history.

use anyhow::Result;
use utm_core::error::GenerateError;
use utm_core::history::HistoryStore;
use utm_core::{generate, GenerationRequest, LinkOutcome, TrackingFieldSet};

use crate::cli::render::{preview, TerminalNotifier};

/// Returns `Ok(false)` when the request was rejected; the notifier has
/// already told the user why.
pub fn run_generate(
    history: &dyn HistoryStore,
    urls: Vec<String>,
    fields: TrackingFieldSet,
    color: bool,
) -> Result<bool> {
    let request = GenerationRequest {
        base_urls: urls,
        fields,
    };
    let outcomes = match generate(&request, history, &TerminalNotifier) {
        Ok(outcomes) => outcomes,
        Err(GenerateError::Validation(_)) => return Ok(false),
    };

    for outcome in &outcomes {
        println!("{}", format_outcome(outcome, color));
    }
    Ok(true)
}

/// One output line per base URL.
pub(crate) fn format_outcome(outcome: &LinkOutcome, color: bool) -> String {
    match outcome {
        LinkOutcome::Composed(link) => preview(link, color),
        LinkOutcome::Invalid { original, .. } => format!("invalid URL: {original}"),
        LinkOutcome::NotSaved { link, reason } => format!("{link} (not saved: {reason})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utm_core::history::MemoryHistory;
    use utm_core::TrackingField;

    fn fields() -> TrackingFieldSet {
        TrackingFieldSet::new()
            .with(TrackingField::Source, "google")
            .with(TrackingField::Medium, "cpc")
    }

    #[test]
    fn run_generate_saves_links() {
        let store = MemoryHistory::new();
        assert!(run_generate(&store, vec!["a.com".into(), "b.com".into()], fields(), false).unwrap());
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn rejected_request_is_reported_once_not_returned_as_error() {
        let store = MemoryHistory::new();
        let ok = run_generate(&store, Vec::new(), fields(), false).unwrap();
        assert!(!ok);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn composed_plain() {
        let o = LinkOutcome::Composed("https://a.com?utm_source=x".into());
        assert_eq!(format_outcome(&o, false), "https://a.com?utm_source=x");
    }

    #[test]
    fn invalid_marker() {
        let o = LinkOutcome::Invalid {
            original: "exa mple.com".into(),
            reason: "invalid domain character".into(),
        };
        assert_eq!(format_outcome(&o, true), "invalid URL: exa mple.com");
    }

    #[test]
    fn not_saved_shows_link_and_reason() {
        let o = LinkOutcome::NotSaved {
            link: "https://a.com?utm_source=x".into(),
            reason: "disk full".into(),
        };
        assert_eq!(
            format_outcome(&o, true),
            "https://a.com?utm_source=x (not saved: disk full)"
        );
    }
}
