//! Error types for link generation, composition and export.

use thiserror::Error;

/// Reasons a generation request is rejected before any link is composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one base URL is required")]
    NoBaseUrl,
    #[error("utm_source is required")]
    MissingSource,
    #[error("utm_medium is required")]
    MissingMedium,
    #[error("too many base URLs: {given} given, at most {max} allowed")]
    TooManyBaseUrls { given: usize, max: usize },
}

/// A single base URL that could not be turned into a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Failure of a whole generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    /// Exporting an empty history produces no file.
    #[error("nothing to export")]
    Empty,
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("write export: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::NoBaseUrl.to_string(),
            "at least one base URL is required"
        );
        assert_eq!(
            ValidationError::TooManyBaseUrls { given: 7, max: 6 }.to_string(),
            "too many base URLs: 7 given, at most 6 allowed"
        );
    }

    #[test]
    fn generate_error_wraps_validation() {
        let err: GenerateError = ValidationError::MissingMedium.into();
        assert!(matches!(
            err,
            GenerateError::Validation(ValidationError::MissingMedium)
        ));
        assert_eq!(err.to_string(), "utm_medium is required");
    }
}
