//! Core domain types and algorithms
//!
//! Pure, synchronous, I/O-free: words, feedback normalization and simulation,
//! the consistency filter, and the frequency scorer.

mod feedback;
mod filter;
mod score;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSymbol};
pub use filter::{filter_candidates, is_consistent};
pub use score::{letter_frequencies, rank_against, score_word, score_words, top_scored};
pub use word::{Word, WordError, WORD_LENGTH};
