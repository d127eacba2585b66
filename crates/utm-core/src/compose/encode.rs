//! Space encoding applied to finished links.
//!
//! Some click trackers read `+` as a literal plus, so every space-like token
//! is forced to `%20`. No other character is escaped: commas and semicolons
//! must reach the tracker untouched.

const ENCODED_SPACE: &str = "%20";
const ENCODED_PLUS: &str = "%2B";

/// Characters treated as spaces: the ECMAScript whitespace and line
/// terminator sets. Unlike [`char::is_whitespace`] this includes U+FEFF and
/// excludes U+0085.
fn is_space_like(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Rewrites space-like characters, `+` and `%2B` to `%20`.
///
/// Idempotent: the output contains none of the three tokens.
pub fn encode_spaces(link: &str) -> String {
    let mut out = String::with_capacity(link.len());
    for c in link.chars() {
        if is_space_like(c) || c == '+' {
            out.push_str(ENCODED_SPACE);
        } else {
            out.push(c);
        }
    }
    // Matching is case-sensitive; `%2b` is left alone.
    out.replace(ENCODED_PLUS, ENCODED_SPACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spaces_and_plus_become_percent_20() {
        assert_eq!(encode_spaces("spring sale+promo"), "spring%20sale%20promo");
        assert_eq!(encode_spaces("a\tb"), "a%20b");
    }

    #[test]
    fn space_set_includes_bom_but_not_next_line() {
        assert_eq!(encode_spaces("a\u{FEFF}b"), "a%20b");
        assert_eq!(encode_spaces("a\u{3000}b\u{2028}c"), "a%20b%20c");
        assert_eq!(encode_spaces("a\u{85}b"), "a\u{85}b");
    }

    #[test]
    fn encoded_plus_becomes_percent_20() {
        assert_eq!(encode_spaces("q=a%2Bb"), "q=a%20b");
        assert_eq!(encode_spaces("q=a%2bb"), "q=a%2bb");
    }

    #[test]
    fn existing_percent_20_and_punctuation_untouched() {
        assert_eq!(encode_spaces("a%20b,c;d"), "a%20b,c;d");
        assert_eq!(encode_spaces("x=1&y=2#frag"), "x=1&y=2#frag");
    }

    proptest! {
        #[test]
        fn encode_spaces_is_idempotent(s in "[ +%2Bab,;&=]{0,40}") {
            let once = encode_spaces(&s);
            prop_assert_eq!(encode_spaces(&once), once);
        }

        #[test]
        fn output_has_no_space_tokens(s in "\\PC*") {
            let out = encode_spaces(&s);
            prop_assert!(!out.contains('+'));
            prop_assert!(!out.chars().any(is_space_like));
            prop_assert!(!out.contains("%2B"));
        }
    }
}
