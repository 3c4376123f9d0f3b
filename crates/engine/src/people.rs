//! Person identity normalization.
//!
//! Expenses carry a free-text payer name. Names are grouped by their
//! normalized form, so two distinct people sharing a normalized name are
//! treated as one person.

use unicode_normalization::UnicodeNormalization;

/// Canonical display form of a payer name.
///
/// Whitespace is trimmed and collapsed to single spaces, the text is NFC
/// composed, and every word is title-cased: a cased character following a
/// non-cased one is upper-cased, any other cased character is lower-cased.
///
/// ```rust
/// use engine::normalize_person;
///
/// assert_eq!(normalize_person("  aLiCe   smith "), "Alice Smith");
/// assert_eq!(normalize_person("o'neil"), "O'Neil");
/// ```
pub fn normalize_person(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for token in name.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut prev_cased = false;
        for ch in token.nfc() {
            if is_cased(ch) {
                if prev_cased {
                    out.extend(ch.to_lowercase());
                } else {
                    out.extend(ch.to_uppercase());
                }
                prev_cased = true;
            } else {
                out.push(ch);
                prev_cased = false;
            }
        }
    }
    out
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_padding_collapse_to_one_identity() {
        assert_eq!(normalize_person("alice"), "Alice");
        assert_eq!(normalize_person(" Alice"), "Alice");
        assert_eq!(normalize_person("ALICE "), "Alice");
        assert_eq!(normalize_person("\tAlIcE\n"), "Alice");
    }

    #[test]
    fn every_word_is_title_cased() {
        assert_eq!(normalize_person("mary   jane WATSON"), "Mary Jane Watson");
        assert_eq!(normalize_person("anne-marie"), "Anne-Marie");
        assert_eq!(normalize_person("o'neil"), "O'Neil");
    }

    #[test]
    fn non_letters_are_kept() {
        assert_eq!(normalize_person("bob2"), "Bob2");
        assert_eq!(normalize_person("2nd floor"), "2Nd Floor");
    }

    #[test]
    fn decomposed_accents_match_composed() {
        assert_eq!(normalize_person("e\u{301}lodie"), "\u{c9}lodie");
        assert_eq!(normalize_person("\u{c9}LODIE"), "\u{c9}lodie");
    }

    #[test]
    fn blank_names_normalize_to_empty() {
        assert_eq!(normalize_person("   "), "");
    }
}
