//! Word lists
//!
//! Embedded default dictionary plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' has wrong length");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_contains_preset_openers() {
        for opener in ["arose", "linty", "chump"] {
            assert!(DICTIONARY.contains(&opener), "missing opener '{opener}'");
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }
}
