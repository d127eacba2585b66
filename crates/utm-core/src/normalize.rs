//! Slug normalization for tracking field values.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes free text into a tracking-safe slug.
///
/// - Folds accented letters to their base letter (NFD, combining marks dropped)
/// - Lowercases
/// - Replaces every run of characters outside `[a-z0-9]` with a single `_`
/// - Trims leading/trailing `_`
///
/// The result matches `^[a-z0-9]*(_[a-z0-9]+)*$`; empty input yields `""`.
///
/// # Examples
///
/// - `normalize("Divulgação Pública!")` → `"divulgacao_publica"`
/// - `normalize("  Black   Friday 2024 ")` → `"black_friday_2024"`
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = folded.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // Separators are only emitted between two kept characters.
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }

    out
}
