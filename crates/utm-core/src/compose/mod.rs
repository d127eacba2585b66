//! Link composition: base URL plus tracking fields.
//!
//! The link is assembled by plain string concatenation. The `url` crate is
//! only used to check that the repaired base is a usable absolute URL, since
//! its serializer would percent-encode characters trackers expect verbatim.

mod encode;
mod scheme;

pub use encode::encode_spaces;
pub use scheme::{has_http_scheme, repair_scheme};

use crate::error::ComposeError;
use crate::fields::TrackingFieldSet;

/// Builds the `key=value&...` suffix from the non-empty fields, in fixed order.
///
/// Values are not escaped; `&`, `=` and `#` inside a value pass through.
pub fn query_suffix(fields: &TrackingFieldSet) -> String {
    fields
        .non_empty()
        .map(|(field, value)| format!("{}={}", field.as_str(), value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Composes a tracking link for `base_url`.
///
/// Missing schemes are repaired to `https://`. When no field is set the
/// repaired base is returned as is; otherwise the suffix is attached with `&`
/// if the base already has a `?`, else with `?`, and the whole link goes
/// through [`encode_spaces`].
///
/// # Examples
///
/// - `compose("example.com", {utm_source: "google", utm_medium: "cpc"})`
///   → `"https://example.com?utm_source=google&utm_medium=cpc"`
/// - `compose("https://x.com?ref=1", {utm_source: "a"})`
///   → `"https://x.com?ref=1&utm_source=a"`
pub fn compose(base_url: &str, fields: &TrackingFieldSet) -> Result<String, ComposeError> {
    let base = repair_scheme(base_url);
    validate_base(&base)?;

    let suffix = query_suffix(fields);
    if suffix.is_empty() {
        return Ok(base);
    }

    let joiner = if base.contains('?') { '&' } else { '?' };
    let link = format!("{base}{joiner}{suffix}");
    Ok(encode_spaces(&link))
}

fn validate_base(base: &str) -> Result<(), ComposeError> {
    let invalid = |reason: String| ComposeError::InvalidUrl {
        url: base.to_string(),
        reason,
    };
    let parsed = url::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid("missing host".to_string())),
    }
}
