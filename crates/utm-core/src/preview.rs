//! Breaks a composed link into segments for colored display.

use crate::fields::TrackingField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSegment {
    /// Origin and path.
    Base(String),
    /// `?` or `&`.
    Separator(char),
    /// One `key=value` pair; `field` is set for known tracking keys.
    Param {
        field: Option<TrackingField>,
        text: String,
    },
    /// Text that is not a parseable URL, shown as is.
    Plain(String),
}

/// Splits `link` into base and query-pair segments.
///
/// Query pairs are taken verbatim from the link so the preview shows exactly
/// what will be copied (`%20` stays `%20`). The fragment is not shown.
pub fn segments(link: &str) -> Vec<PreviewSegment> {
    let parsed = match url::Url::parse(link) {
        Ok(u) if u.has_host() => u,
        _ => return vec![PreviewSegment::Plain(link.to_string())],
    };

    let mut out = vec![PreviewSegment::Base(format!(
        "{}{}",
        parsed.origin().ascii_serialization(),
        parsed.path()
    ))];

    // The parser re-escapes some characters in the query, so pairs come from
    // the raw link instead.
    let raw_query = link
        .split_once('?')
        .map(|(_, q)| q.split_once('#').map_or(q, |(q, _)| q));
    let pairs = raw_query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter(|p| !p.is_empty());
    for (i, pair) in pairs.enumerate() {
        out.push(PreviewSegment::Separator(if i == 0 { '?' } else { '&' }));
        let key = pair.split_once('=').map_or(pair, |(k, _)| k);
        out.push(PreviewSegment::Param {
            field: TrackingField::from_key(key),
            text: pair.to_string(),
        });
    }
    out
}
