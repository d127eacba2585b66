//! Generation of tracking links for a batch of base URLs.
//!
//! A request is validated as a whole; once it passes, each base URL is
//! composed independently and only successful links reach history.

use crate::compose::compose;
use crate::error::{GenerateError, ValidationError};
use crate::fields::{TrackingField, TrackingFieldSet};
use crate::history::{HistoryRecord, HistoryStore};
use crate::notify::{Notice, Notifier};

/// Maximum number of base URLs in one request.
pub const MAX_BASE_URLS: usize = 6;

/// Everything needed to generate links, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub base_urls: Vec<String>,
    pub fields: TrackingFieldSet,
}

/// Result of composing one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Composed(String),
    Invalid { original: String, reason: String },
    /// Composed, but the history write failed.
    NotSaved { link: String, reason: String },
}

impl LinkOutcome {
    /// The link, if it was composed and saved.
    pub fn link(&self) -> Option<&str> {
        match self {
            LinkOutcome::Composed(link) => Some(link),
            LinkOutcome::Invalid { .. } | LinkOutcome::NotSaved { .. } => None,
        }
    }
}

/// Trimmed, non-empty base URLs and normalized fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub base_urls: Vec<String>,
    pub fields: TrackingFieldSet,
}

/// Trims and filters base URLs, normalizes fields, and checks required inputs.
pub fn validate(request: &GenerationRequest) -> Result<ValidatedRequest, ValidationError> {
    let base_urls: Vec<String> = request
        .base_urls
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();
    let fields = request.fields.normalized();

    if base_urls.is_empty() {
        return Err(ValidationError::NoBaseUrl);
    }
    if base_urls.len() > MAX_BASE_URLS {
        return Err(ValidationError::TooManyBaseUrls {
            given: base_urls.len(),
            max: MAX_BASE_URLS,
        });
    }
    if fields.get(TrackingField::Source).is_empty() {
        return Err(ValidationError::MissingSource);
    }
    if fields.get(TrackingField::Medium).is_empty() {
        return Err(ValidationError::MissingMedium);
    }

    Ok(ValidatedRequest { base_urls, fields })
}

/// Runs a generation request.
///
/// Validation failures abort before any history write. Each base URL is then
/// composed and saved on its own: a bad URL becomes [`LinkOutcome::Invalid`],
/// a failed history write becomes [`LinkOutcome::NotSaved`], and neither stops
/// the remaining URLs. Duplicates are skipped by the store.
pub fn generate(
    request: &GenerationRequest,
    history: &dyn HistoryStore,
    notifier: &dyn Notifier,
) -> Result<Vec<LinkOutcome>, GenerateError> {
    let validated = match validate(request) {
        Ok(v) => v,
        Err(err) => {
            tracing::info!("generation rejected: {}", err);
            notifier.notify(&Notice::Rejected(err.clone()));
            return Err(err.into());
        }
    };

    let mut outcomes = Vec::with_capacity(validated.base_urls.len());
    for original in &validated.base_urls {
        match compose(original, &validated.fields) {
            Ok(link) => match history.append(HistoryRecord::today(link.clone())) {
                Ok(_) => {
                    tracing::debug!(%original, %link, "composed link");
                    outcomes.push(LinkOutcome::Composed(link));
                }
                Err(err) => {
                    tracing::error!(%link, "history write failed: {:#}", err);
                    outcomes.push(LinkOutcome::NotSaved {
                        link,
                        reason: format!("{err:#}"),
                    });
                }
            },
            Err(err) => {
                tracing::warn!(%original, "skipping base URL: {}", err);
                outcomes.push(LinkOutcome::Invalid {
                    original: original.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let composed = outcomes.iter().filter(|o| o.link().is_some()).count();
    notifier.notify(&Notice::Generated {
        composed,
        total: outcomes.len(),
    });
    Ok(outcomes)
}
