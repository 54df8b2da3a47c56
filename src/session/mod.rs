//! Solver sessions
//!
//! A session owns the puzzle slots, the shared append-only guess history, and
//! the opener configuration. Slots are independent: applying feedback to one
//! never touches another, and guess selection only reads slot state between
//! rounds.

mod openers;
mod policy;
mod slot;

pub use openers::Openers;
pub use policy::{GuessPolicy, SelectError, SequentialPolicy, SimultaneousPolicy};
pub use slot::{PuzzleSlot, SlotStatus};

use crate::core::{Feedback, Word};

/// A possibly multi-word solving session
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<Word>,
    slots: Vec<PuzzleSlot>,
    history: Vec<Word>,
    openers: Openers,
    replays: Vec<Word>,
}

impl Session {
    /// Start a session with `num_slots` fresh slots over the dictionary
    #[must_use]
    pub fn new(dictionary: Vec<Word>, num_slots: usize, openers: Openers) -> Self {
        let slots = (0..num_slots)
            .map(|i| PuzzleSlot::new(format!("Word {}", i + 1), &dictionary))
            .collect();
        Self {
            dictionary,
            slots,
            history: Vec::new(),
            openers,
            replays: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[PuzzleSlot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn openers(&self) -> &Openers {
        &self.openers
    }

    /// Append a guess to the shared history
    pub fn record_guess(&mut self, guess: Word) {
        self.history.push(guess);
    }

    /// The next unplayed opener, if the configuration still has one
    ///
    /// Openers already present in the history are considered consumed, so a
    /// solved word recorded mid-sequence does not desynchronize the order.
    #[must_use]
    pub fn next_opener(&self) -> Option<&Word> {
        let used = self
            .history
            .iter()
            .filter(|g| self.openers.contains(g))
            .count();
        self.openers.get(used)
    }

    /// Queue a word determined mid-game to be played as a shared guess
    ///
    /// A slot that solves early still owes the board its word, and the
    /// feedback the other slots show for it prunes their candidates. Words
    /// already guessed or already queued are ignored.
    pub fn enqueue_replay(&mut self, word: Word) {
        if !self.history.contains(&word) && !self.replays.contains(&word) {
            self.replays.push(word);
        }
    }

    /// The next queued replay that has not been played yet
    #[must_use]
    pub fn next_replay(&self) -> Option<&Word> {
        self.replays.iter().find(|w| !self.history.contains(w))
    }

    /// Apply feedback for a guess to one slot
    ///
    /// # Panics
    /// Panics if `slot_index` is out of range.
    pub fn apply(&mut self, slot_index: usize, guess: &Word, feedback: &Feedback) -> &SlotStatus {
        self.slots[slot_index].apply(guess, feedback)
    }

    /// Slots still actively narrowing
    pub fn active_slots(&self) -> impl Iterator<Item = &PuzzleSlot> {
        self.slots.iter().filter(|s| s.is_active())
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.slots.iter().all(PuzzleSlot::is_solved)
    }

    /// True when no slot can make further progress
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.slots.iter().all(|s| !s.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["arose", "linty", "chump", "later", "zonal"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect()
    }

    #[test]
    fn new_session_has_labeled_active_slots() {
        let session = Session::new(dictionary(), 2, Openers::none());

        assert_eq!(session.slots().len(), 2);
        assert_eq!(session.slots()[0].label(), "Word 1");
        assert_eq!(session.slots()[1].label(), "Word 2");
        assert!(session.slots().iter().all(PuzzleSlot::is_active));
    }

    #[test]
    fn openers_are_consumed_in_order() {
        let mut session = Session::new(dictionary(), 1, Openers::preset(2).unwrap());

        assert_eq!(session.next_opener().unwrap().text(), "arose");
        session.record_guess(Word::new("arose").unwrap());

        assert_eq!(session.next_opener().unwrap().text(), "linty");
        session.record_guess(Word::new("linty").unwrap());

        assert!(session.next_opener().is_none());
    }

    #[test]
    fn non_opener_guess_does_not_consume_openers() {
        let mut session = Session::new(dictionary(), 1, Openers::preset(2).unwrap());

        session.record_guess(Word::new("zonal").unwrap());
        assert_eq!(session.next_opener().unwrap().text(), "arose");
    }

    #[test]
    fn slot_fault_is_local() {
        let mut session = Session::new(dictionary(), 2, Openers::none());

        // Exhaust slot 0 with contradictory feedback
        let guess = Word::new("zonal").unwrap();
        session.apply(0, &guess, &Feedback::from_raw("ggggb").unwrap());

        assert!(session.slots()[0].is_exhausted());
        assert!(session.slots()[1].is_active());
        assert!(!session.is_finished());
    }

    #[test]
    fn history_is_shared_and_append_only() {
        let mut session = Session::new(dictionary(), 3, Openers::none());
        session.record_guess(Word::new("arose").unwrap());
        session.record_guess(Word::new("linty").unwrap());

        let texts: Vec<&str> = session.history().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["arose", "linty"]);
    }

    #[test]
    fn replay_queue_skips_played_and_duplicate_words() {
        let mut session = Session::new(dictionary(), 2, Openers::none());
        session.record_guess(Word::new("arose").unwrap());

        // Already in the history: nothing to replay
        session.enqueue_replay(Word::new("arose").unwrap());
        assert!(session.next_replay().is_none());

        session.enqueue_replay(Word::new("zonal").unwrap());
        session.enqueue_replay(Word::new("zonal").unwrap());
        assert_eq!(session.next_replay().unwrap().text(), "zonal");

        // Playing the word consumes the queue entry
        session.record_guess(Word::new("zonal").unwrap());
        assert!(session.next_replay().is_none());
    }

    #[test]
    fn all_solved_and_finished() {
        let mut session = Session::new(dictionary(), 2, Openers::none());
        assert!(!session.all_solved());

        let later = Word::new("later").unwrap();
        let zonal = Word::new("zonal").unwrap();
        session.apply(0, &later, &Feedback::winning());
        session.apply(1, &zonal, &Feedback::winning());

        assert!(session.all_solved());
        assert!(session.is_finished());
    }
}
