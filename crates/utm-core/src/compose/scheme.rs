//! Scheme repair for user-entered base URLs.

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// True if `url` starts with `http://` or `https://`, ignoring ASCII case.
pub fn has_http_scheme(url: &str) -> bool {
    starts_with_ignore_case(url, "http://") || starts_with_ignore_case(url, "https://")
}

/// Prepends `https://` unless the URL already carries an http(s) scheme.
pub fn repair_scheme(url: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{url}")
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
