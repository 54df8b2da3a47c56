//! Per-puzzle slot state machine
//!
//! A slot owns one puzzle's candidate set and moves `Active -> Solved` or
//! `Active -> Exhausted`; both end states are absorbing.

use crate::core::{filter_candidates, Feedback, Word};
use std::fmt;

/// Lifecycle state of a puzzle slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// Still narrowing candidates
    Active,
    /// Uniquely determined, carries the solution
    Solved(Word),
    /// Candidate set became empty: contradictory feedback history
    Exhausted,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Solved(word) => write!(f, "solved ({word})"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// One independently tracked puzzle instance
#[derive(Debug, Clone)]
pub struct PuzzleSlot {
    label: String,
    candidates: Vec<Word>,
    status: SlotStatus,
}

impl PuzzleSlot {
    /// Create a fresh slot over the full dictionary
    ///
    /// A single-word dictionary starts the slot already solved.
    #[must_use]
    pub fn new(label: impl Into<String>, dictionary: &[Word]) -> Self {
        let candidates: Vec<Word> = dictionary.to_vec();
        let status = match candidates.as_slice() {
            [] => SlotStatus::Exhausted,
            [only] => SlotStatus::Solved(only.clone()),
            _ => SlotStatus::Active,
        };
        Self {
            label: label.into(),
            candidates,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> &SlotStatus {
        &self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, SlotStatus::Active)
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.status, SlotStatus::Solved(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.status, SlotStatus::Exhausted)
    }

    /// Apply one observed `(guess, feedback)` pair
    ///
    /// Filters the candidate set, then resolves the status: winning feedback
    /// solves with the guess itself; a single surviving candidate solves
    /// early even without all-green feedback; an empty set is terminal
    /// exhaustion. Solved and exhausted slots ignore further applications.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> &SlotStatus {
        if !self.is_active() {
            return &self.status;
        }

        if feedback.is_winning() {
            self.candidates = vec![guess.clone()];
            self.status = SlotStatus::Solved(guess.clone());
            return &self.status;
        }

        self.candidates = filter_candidates(&self.candidates, guess, feedback);

        self.status = match self.candidates.as_slice() {
            [] => SlotStatus::Exhausted,
            [only] => SlotStatus::Solved(only.clone()),
            _ => SlotStatus::Active,
        };
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn fresh_slot_is_active_with_full_dictionary() {
        let dictionary = words(&["arose", "raise", "later", "zonal"]);
        let slot = PuzzleSlot::new("Word 1", &dictionary);

        assert!(slot.is_active());
        assert_eq!(slot.candidate_count(), 4);
        assert_eq!(slot.label(), "Word 1");
    }

    #[test]
    fn winning_feedback_solves_with_the_guess() {
        let dictionary = words(&["arose", "raise", "later", "zonal"]);
        let mut slot = PuzzleSlot::new("Word 1", &dictionary);

        let guess = Word::new("later").unwrap();
        let status = slot.apply(&guess, &Feedback::winning());
        assert_eq!(status, &SlotStatus::Solved(guess));
    }

    #[test]
    fn early_solve_on_single_candidate() {
        // AROSE vs LATER feedback narrows this dictionary to just "later",
        // which must count as solved without an all-green round.
        let dictionary = words(&["arose", "raise", "later", "zonal"]);
        let mut slot = PuzzleSlot::new("Word 1", &dictionary);

        let guess = Word::new("arose").unwrap();
        let feedback = Feedback::simulate(&guess, &Word::new("later").unwrap());
        let status = slot.apply(&guess, &feedback);

        assert_eq!(status, &SlotStatus::Solved(Word::new("later").unwrap()));
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let dictionary = words(&["arose", "raise"]);
        let mut slot = PuzzleSlot::new("Word 1", &dictionary);

        let guess = Word::new("zonal").unwrap();
        // Claim the first four letters of ZONAL are placed correctly
        let feedback = Feedback::from_raw("ggggb").unwrap();
        let status = slot.apply(&guess, &feedback);

        assert_eq!(status, &SlotStatus::Exhausted);
    }

    #[test]
    fn solved_is_absorbing() {
        let dictionary = words(&["arose", "raise", "later"]);
        let mut slot = PuzzleSlot::new("Word 1", &dictionary);

        let guess = Word::new("later").unwrap();
        slot.apply(&guess, &Feedback::winning());
        assert!(slot.is_solved());

        // A later contradictory application must not resurrect the slot
        let other = Word::new("zonal").unwrap();
        slot.apply(&other, &Feedback::from_raw("ggggg").unwrap());
        assert_eq!(slot.status(), &SlotStatus::Solved(guess));
    }

    #[test]
    fn exhausted_is_absorbing() {
        let mut slot = PuzzleSlot::new("Word 1", &[]);
        assert!(slot.is_exhausted());

        let guess = Word::new("arose").unwrap();
        slot.apply(&guess, &Feedback::winning());
        assert!(slot.is_exhausted());
    }

    #[test]
    fn two_guess_sequence_reaches_solved() {
        // Four words with distinguishing letters: two rounds pin one down.
        let dictionary = words(&["arose", "linty", "chump", "later"]);
        let solution = Word::new("chump").unwrap();
        let mut slot = PuzzleSlot::new("Word 1", &dictionary);

        let first = Word::new("arose").unwrap();
        slot.apply(&first, &Feedback::simulate(&first, &solution));

        if slot.is_active() {
            let second = Word::new("linty").unwrap();
            slot.apply(&second, &Feedback::simulate(&second, &solution));
        }

        assert_eq!(slot.status(), &SlotStatus::Solved(solution));
    }
}
