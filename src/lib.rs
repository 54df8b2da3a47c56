//! Word Assist
//!
//! An assistant for Wordle-style word-guessing puzzles, able to solve several
//! independent puzzles in parallel with a shared pool of guesses. The core is
//! a feedback-consistency filter with exact duplicate-letter count semantics
//! and a letter-frequency scorer for picking the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use word_assist::core::{filter_candidates, Feedback, Word};
//!
//! let dictionary = vec![
//!     Word::new("arose").unwrap(),
//!     Word::new("later").unwrap(),
//! ];
//! let guess = Word::new("arose").unwrap();
//! let feedback = Feedback::from_raw("yybby").unwrap();
//!
//! let remaining = filter_candidates(&dictionary, &guess, &feedback);
//! assert_eq!(remaining[0].text(), "later");
//! ```

// Core domain types and algorithms
pub mod core;

// Puzzle slots, sessions, and guess policies
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
