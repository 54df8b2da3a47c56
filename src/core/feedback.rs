//! Guess feedback representation and simulation
//!
//! Feedback is one symbol per letter position: `Correct` (right letter, right
//! spot), `Present` (right letter, wrong spot), or `Absent`. Raw input maps
//! 'g' to `Correct` and 'y' to `Present`; every other character is an alias
//! for `Absent` ('b', 'x', 'n', 'e', '-', ...), so normalization never fails
//! on content, only on length.

use super::word::{Word, WORD_LENGTH};
use std::fmt;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter matches this position (green)
    Correct,
    /// Letter is in the word at a different position (yellow)
    Present,
    /// Letter is not in the word, subject to duplicate accounting (gray)
    Absent,
}

/// Error type for malformed raw feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Raw feedback string length does not equal the word length
    InvalidLength(usize),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Ordered feedback for one guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// Normalize a raw feedback string into canonical symbols
    ///
    /// 'g'/'G' becomes `Correct`, 'y'/'Y' becomes `Present`, and any other
    /// character becomes `Absent`.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if the raw string does not have
    /// exactly [`WORD_LENGTH`] characters.
    ///
    /// # Examples
    /// ```
    /// use word_assist::core::{Feedback, FeedbackSymbol};
    ///
    /// let fb = Feedback::from_raw("gyxnb").unwrap();
    /// assert_eq!(fb.symbol_at(0), FeedbackSymbol::Correct);
    /// assert_eq!(fb.symbol_at(1), FeedbackSymbol::Present);
    /// assert_eq!(fb.symbol_at(2), FeedbackSymbol::Absent);
    /// ```
    pub fn from_raw(raw: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = raw.chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = match ch {
                'g' | 'G' => FeedbackSymbol::Correct,
                'y' | 'Y' => FeedbackSymbol::Present,
                _ => FeedbackSymbol::Absent,
            };
        }

        Ok(Self(symbols))
    }

    /// Construct from an explicit symbol array
    #[inline]
    #[must_use]
    pub const fn from_symbols(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// The all-`Correct` feedback signaling a solved word
    #[must_use]
    pub const fn winning() -> Self {
        Self([FeedbackSymbol::Correct; WORD_LENGTH])
    }

    /// True iff every symbol is `Correct`
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Get the symbol at a position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Get all symbols in position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Generate the feedback a guess would receive against a known solution
    ///
    /// Implements the canonical rule: first mark exact position matches and
    /// consume those solution letters, then scan left to right marking
    /// `Present` wherever an unconsumed occurrence of the guessed letter
    /// remains. This is the ground truth the consistency filter must agree
    /// with.
    ///
    /// # Examples
    /// ```
    /// use word_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("arose").unwrap();
    /// let feedback = Feedback::simulate(&guess, &guess);
    /// assert!(feedback.is_winning());
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, solution: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // First pass: exact matches consume their occurrence
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == solution.char_at(i) {
                symbols[i] = FeedbackSymbol::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, left to right, one occurrence each
        for i in 0..WORD_LENGTH {
            if symbols[i] == FeedbackSymbol::Absent {
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    if *count > 0 {
                        symbols[i] = FeedbackSymbol::Present;
                        *count -= 1;
                    }
                }
            }
        }

        Self(symbols)
    }

    /// Render the feedback as colored squares
    ///
    /// # Examples
    /// ```
    /// use word_assist::core::Feedback;
    ///
    /// let fb = Feedback::from_raw("gybyx").unwrap();
    /// assert_eq!(fb.to_emoji(), "🟩🟨⬜🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                FeedbackSymbol::Correct => '🟩',
                FeedbackSymbol::Present => '🟨',
                FeedbackSymbol::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            let ch = match s {
                FeedbackSymbol::Correct => 'g',
                FeedbackSymbol::Present => 'y',
                FeedbackSymbol::Absent => 'b',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw(s)
    }
}
