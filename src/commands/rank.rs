//! Candidate ranking command
//!
//! Exposes the frequency scorer directly: ranks the dictionary by aggregate
//! letter frequency, which is also a quick way to audit opener choices.

use crate::core::{top_scored, Word};

/// Result of ranking a dictionary
pub struct RankResult {
    pub entries: Vec<(Word, u32)>,
    pub total_words: usize,
}

/// Rank the dictionary and keep the top `n` entries
#[must_use]
pub fn run_rank(dictionary: &[Word], n: usize) -> RankResult {
    RankResult {
        entries: top_scored(dictionary, &[], n),
        total_words: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["abase", "ceded", "arose", "later"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect()
    }

    #[test]
    fn rank_returns_requested_count() {
        let result = run_rank(&dictionary(), 2);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.total_words, 4);
    }

    #[test]
    fn rank_is_sorted_descending() {
        let result = run_rank(&dictionary(), 4);
        for pair in result.entries.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn rank_handles_oversized_n() {
        let result = run_rank(&dictionary(), 100);
        assert_eq!(result.entries.len(), 4);
    }
}
