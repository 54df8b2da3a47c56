//! Guess-selection policies
//!
//! The two solver modes share one interface: a policy reads the session
//! between rounds and proposes the next shared guess. Queued replays of
//! words solved mid-game come first in either mode, then unplayed openers;
//! after that the modes diverge in which candidate set feeds the scorer. An `Active` slot always holds at least two candidates
//! because a single-candidate slot solves itself during `apply`.

use super::Session;
use crate::core::{rank_against, top_scored, Word};
use std::fmt;

/// A slot with this few candidates is worth finishing off immediately
const FEW_CANDIDATES: usize = 3;

/// Error raised when no guess can be selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Every scorable candidate has already been guessed, or nothing is active
    NoGuessAvailable,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuessAvailable => write!(f, "no scorable guess available"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Strategy interface for choosing the next shared guess
pub trait GuessPolicy {
    /// Select the next guess from the session's current state
    ///
    /// # Errors
    /// Returns `SelectError::NoGuessAvailable` when no slot is active or
    /// every remaining candidate has been guessed already; the driving loop
    /// must stop rather than retry.
    fn select_guess(&self, session: &Session) -> Result<Word, SelectError>;
}

/// Multi-word mode: every slot sees the same guess each round
///
/// Preference order after replays and openers: a nearly finished slot, the
/// only remaining slot, and finally the full dictionary ranked against the
/// pooled candidates of all unsolved slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimultaneousPolicy;

impl GuessPolicy for SimultaneousPolicy {
    fn select_guess(&self, session: &Session) -> Result<Word, SelectError> {
        let active: Vec<&super::PuzzleSlot> = session.active_slots().collect();
        if active.is_empty() {
            return Err(SelectError::NoGuessAvailable);
        }

        // An early-solved word must still hit the board; its feedback
        // prunes every remaining slot
        if let Some(word) = session.next_replay() {
            return Ok(word.clone());
        }

        if let Some(opener) = session.next_opener() {
            return Ok(opener.clone());
        }

        // Close out a nearly finished slot before probing broadly
        if let Some(slot) = active.iter().find(|s| s.candidate_count() <= FEW_CANDIDATES) {
            return first_scored(slot.candidates(), session.history());
        }

        if let [only] = active.as_slice() {
            return first_scored(only.candidates(), session.history());
        }

        // Several wide-open slots: rank the whole dictionary against the
        // pooled unsolved candidates so one probe serves every slot.
        let pooled: Vec<Word> = active
            .iter()
            .flat_map(|s| s.candidates().iter().cloned())
            .collect();
        rank_against(session.dictionary(), &pooled)
            .into_iter()
            .map(|(word, _)| word)
            .find(|word| !session.history().contains(word))
            .ok_or(SelectError::NoGuessAvailable)
    }
}

/// Sequential mode: finish one slot before moving to the next
///
/// Scores only the first active slot's candidates, so every guess works
/// directly toward the word currently in focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialPolicy;

impl GuessPolicy for SequentialPolicy {
    fn select_guess(&self, session: &Session) -> Result<Word, SelectError> {
        let slot = session
            .active_slots()
            .next()
            .ok_or(SelectError::NoGuessAvailable)?;

        if let Some(word) = session.next_replay() {
            return Ok(word.clone());
        }

        if let Some(opener) = session.next_opener() {
            return Ok(opener.clone());
        }

        first_scored(slot.candidates(), session.history())
    }
}

/// Highest-scored candidate not yet guessed
fn first_scored(candidates: &[Word], history: &[Word]) -> Result<Word, SelectError> {
    top_scored(candidates, history, 1)
        .into_iter()
        .next()
        .map(|(word, _)| word)
        .ok_or(SelectError::NoGuessAvailable)
}
