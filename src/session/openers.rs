//! Opener configuration
//!
//! Openers are guesses fixed before any feedback-driven scoring begins. The
//! configuration is an explicit value handed to session construction, never
//! process-wide state.

use crate::core::Word;

/// Preset opener words, in play order
const PRESET_OPENERS: [&str; 3] = ["arose", "linty", "chump"];

/// An ordered list of pre-chosen guesses
#[derive(Debug, Clone, Default)]
pub struct Openers(Vec<Word>);

impl Openers {
    /// No openers: scoring drives every guess from the start
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// The first `count` preset openers (arose, linty, chump)
    ///
    /// Returns `None` when `count` exceeds the number of presets.
    #[must_use]
    pub fn preset(count: usize) -> Option<Self> {
        if count > PRESET_OPENERS.len() {
            return None;
        }
        let words = PRESET_OPENERS[..count]
            .iter()
            .filter_map(|w| Word::new(*w).ok())
            .collect();
        Some(Self(words))
    }

    /// A custom opener list, played in the given order
    #[must_use]
    pub fn custom(words: Vec<Word>) -> Self {
        Self(words)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_counts() {
        assert!(Openers::preset(0).unwrap().is_empty());
        assert_eq!(Openers::preset(1).unwrap().as_slice()[0].text(), "arose");

        let three = Openers::preset(3).unwrap();
        let texts: Vec<&str> = three.as_slice().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["arose", "linty", "chump"]);
    }

    #[test]
    fn preset_out_of_range() {
        assert!(Openers::preset(4).is_none());
    }

    #[test]
    fn custom_preserves_order() {
        let words = vec![Word::new("slate").unwrap(), Word::new("crony").unwrap()];
        let openers = Openers::custom(words);
        assert_eq!(openers.get(0).unwrap().text(), "slate");
        assert_eq!(openers.get(1).unwrap().text(), "crony");
        assert!(openers.get(2).is_none());
    }

    #[test]
    fn contains_checks_membership() {
        let openers = Openers::preset(2).unwrap();
        assert!(openers.contains(&Word::new("linty").unwrap()));
        assert!(!openers.contains(&Word::new("chump").unwrap()));
    }
}
