//! Letter-frequency candidate scoring
//!
//! A word's score is the sum, over its distinct letters, of how often that
//! letter occurs across the whole candidate pool. High scores favor guesses
//! that probe the letters most common among the remaining possibilities. This
//! is a heuristic, not an information-gain computation.

use super::word::Word;
use rustc_hash::FxHashMap;

/// Occurrence count of every letter across a set of words
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FxHashMap<u8, u32> {
    let mut freq = FxHashMap::default();
    for word in words {
        for &ch in word.chars() {
            *freq.entry(ch).or_insert(0) += 1;
        }
    }
    freq
}

/// Score one word against precomputed letter frequencies
///
/// Each distinct letter contributes once, so repeated letters earn nothing
/// extra.
#[must_use]
pub fn score_word(word: &Word, freq: &FxHashMap<u8, u32>) -> u32 {
    let mut seen = [false; 26];
    let mut score = 0;
    for &ch in word.chars() {
        let idx = (ch - b'a') as usize;
        if !seen[idx] {
            seen[idx] = true;
            score += freq.get(&ch).copied().unwrap_or(0);
        }
    }
    score
}

/// Rank a pool of words by frequency score computed from `freq_source`
///
/// Sorted by descending score; ties break lexicographically so the output is
/// deterministic for a given input.
#[must_use]
pub fn rank_against(pool: &[Word], freq_source: &[Word]) -> Vec<(Word, u32)> {
    let freq = letter_frequencies(freq_source);
    let mut scored: Vec<(Word, u32)> = pool
        .iter()
        .map(|word| (word.clone(), score_word(word, &freq)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored
}

/// Rank candidates by aggregate letter frequency over themselves
///
/// # Examples
/// ```
/// use word_assist::core::{score_words, Word};
///
/// let candidates = vec![Word::new("abase").unwrap(), Word::new("ceded").unwrap()];
/// let scored = score_words(&candidates);
/// assert_eq!(scored[0].0.text(), "abase");
/// assert_eq!(scored[0].1, 8);
/// ```
#[must_use]
pub fn score_words(candidates: &[Word]) -> Vec<(Word, u32)> {
    rank_against(candidates, candidates)
}

/// Top `n` scored candidates after removing already-guessed words
///
/// Returns an empty vector when every candidate has been excluded.
#[must_use]
pub fn top_scored(candidates: &[Word], excluding: &[Word], n: usize) -> Vec<(Word, u32)> {
    score_words(candidates)
        .into_iter()
        .filter(|(word, _)| !excluding.contains(word))
        .take(n)
        .collect()
}
