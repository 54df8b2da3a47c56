//! Feedback-consistency filtering
//!
//! Given a guess and the observed feedback, keeps exactly the candidates that
//! could have produced that feedback. Consistency is decided by constraint
//! rather than by re-simulating feedback, which makes the duplicate-letter
//! rules explicit:
//!
//! - `Correct` positions must match exactly.
//! - `Present` positions must differ from the guess letter at that spot, and
//!   the letter must have an occurrence in the candidate not already claimed
//!   by a `Correct` or an earlier `Present` match.
//! - Per distinct guess letter, the colored/absent mix bounds how many copies
//!   the candidate may contain: all-absent means zero, a colored/absent mix
//!   means exactly the colored count, all-colored means at least that many.
//!
//! The count reconciliation is what separates this from the naive "exists
//! elsewhere" filter, which over-retains candidates when a guess repeats a
//! letter.

use super::feedback::{Feedback, FeedbackSymbol};
use super::word::{Word, WORD_LENGTH};

/// Decide whether a candidate could have produced `feedback` for `guess`
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    let mut used = [false; WORD_LENGTH];

    // Greens lock their positions and consume them
    for i in 0..WORD_LENGTH {
        if feedback.symbol_at(i) == FeedbackSymbol::Correct {
            if candidate.char_at(i) != guess.char_at(i) {
                return false;
            }
            used[i] = true;
        }
    }

    // A yellow letter is present but explicitly not in that spot
    for i in 0..WORD_LENGTH {
        if feedback.symbol_at(i) == FeedbackSymbol::Present
            && candidate.char_at(i) == guess.char_at(i)
        {
            return false;
        }
    }

    // Each yellow must claim a distinct unconsumed occurrence in the candidate
    for i in 0..WORD_LENGTH {
        if feedback.symbol_at(i) == FeedbackSymbol::Present {
            let letter = guess.char_at(i);
            let claimed = (0..WORD_LENGTH).find(|&j| {
                j != i && !used[j] && candidate.char_at(j) == letter
            });
            match claimed {
                Some(j) => used[j] = true,
                None => return false,
            }
        }
    }

    // Per-letter count constraints resolve repeated-letter ambiguity
    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        // Evaluate each distinct letter once, at its first occurrence
        if (0..i).any(|k| guess.char_at(k) == letter) {
            continue;
        }

        let mut colored = 0usize;
        let mut has_absent = false;
        for j in 0..WORD_LENGTH {
            if guess.char_at(j) == letter {
                match feedback.symbol_at(j) {
                    FeedbackSymbol::Correct | FeedbackSymbol::Present => colored += 1,
                    FeedbackSymbol::Absent => has_absent = true,
                }
            }
        }

        let count = candidate.count_letter(letter);
        let ok = if colored == 0 {
            // Every occurrence gray: the letter is absent entirely
            count == 0
        } else if has_absent {
            // Mixed: the gray occurrences prove there are no extra copies
            count == colored
        } else {
            // All colored: only a lower bound is known
            count >= colored
        };
        if !ok {
            return false;
        }
    }

    true
}

/// Filter candidates to those consistent with `(guess, feedback)`
///
/// Pure function; the result preserves the relative order of the input and is
/// never larger than it.
///
/// # Examples
/// ```
/// use word_assist::core::{filter_candidates, Feedback, Word};
///
/// let candidates = vec![Word::new("later").unwrap(), Word::new("raise").unwrap()];
/// let guess = Word::new("later").unwrap();
/// let remaining = filter_candidates(&candidates, &guess, &Feedback::winning());
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "later");
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, guess, feedback))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn soundness_simulated_feedback_retains_solution() {
        // For any (guess, solution) pair, filtering with the simulated
        // feedback must keep the solution.
        let pool = words(&[
            "arose", "raise", "later", "zonal", "sassy", "lasso", "speed", "erase", "linty",
            "chump", "abase", "ceded",
        ]);
        for guess in &pool {
            for solution in &pool {
                let feedback = Feedback::simulate(guess, solution);
                let remaining = filter_candidates(&pool, guess, &feedback);
                assert!(
                    remaining.contains(solution),
                    "filter dropped {solution} for guess {guess}"
                );
            }
        }
    }

    #[test]
    fn green_mismatch_rejected() {
        let candidates = words(&["later", "cater", "locus"]);
        let guess = Word::new("later").unwrap();
        let feedback = Feedback::from_raw("gbbbb").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback);
        // 'cater' fails the green; 'later' itself fails the gray constraints
        // on a/t/e/r. Only 'locus' keeps the leading 'l' and avoids the rest.
        assert_eq!(remaining, words(&["locus"]));
    }

    #[test]
    fn yellow_bans_the_exact_position() {
        // 'a' marked Present at position 0 means the candidate must contain
        // 'a' but not at position 0; the gray repeats cap the count at one.
        let candidates = words(&["abase", "zonal", "later"]);
        let guess = Word::new("aaaaa").unwrap();
        let feedback = Feedback::from_raw("ybbbb").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback);
        assert_eq!(remaining, words(&["zonal", "later"]));
    }

    #[test]
    fn all_gray_letter_must_be_absent() {
        let candidates = words(&["raise", "zonal", "chump"]);
        let guess = Word::new("sassy").unwrap();
        let feedback = Feedback::from_raw("bbbbb").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback);
        // raise has 's' and 'a', zonal has 'a'
        assert_eq!(remaining, words(&["chump"]));
    }

    #[test]
    fn mixed_colored_and_gray_forces_exact_count() {
        // Guess SASSY against solution LASSO: greens at positions 1..3, grays
        // for the first 's' and 'y'. The 's' mix (two colored, one gray)
        // proves exactly two copies of 's'.
        let guess = Word::new("sassy").unwrap();
        let solution = Word::new("lasso").unwrap();
        let feedback = Feedback::simulate(&guess, &solution);

        let candidates = words(&["lasso", "basso", "sassy"]);
        let remaining = filter_candidates(&candidates, &guess, &feedback);
        assert_eq!(remaining, words(&["lasso", "basso"]));
    }

    #[test]
    fn all_colored_is_only_a_lower_bound() {
        // Both 'e' occurrences colored, none gray: candidates with two or
        // three e's are all still possible.
        let guess = Word::new("speed").unwrap();
        let feedback = Feedback::from_raw("bbyyb").unwrap();

        let candidate = Word::new("eerie").unwrap(); // three e's, none at 2 or 3
        assert!(is_consistent(&candidate, &guess, &feedback));
    }

    #[test]
    fn idempotence() {
        let candidates = words(&["arose", "raise", "later", "zonal"]);
        let guess = Word::new("arose").unwrap();
        let feedback = Feedback::simulate(&guess, &Word::new("later").unwrap());

        let once = filter_candidates(&candidates, &guess, &feedback);
        let twice = filter_candidates(&once, &guess, &feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn monotonicity() {
        let candidates = words(&["arose", "raise", "later", "zonal", "linty"]);
        for guess_text in ["arose", "sassy", "chump"] {
            let guess = Word::new(guess_text).unwrap();
            for solution in &candidates {
                let feedback = Feedback::simulate(&guess, solution);
                let remaining = filter_candidates(&candidates, &guess, &feedback);
                assert!(remaining.len() <= candidates.len());
            }
        }
    }

    #[test]
    fn preserves_input_order() {
        let candidates = words(&["zonal", "later", "arose"]);
        let guess = Word::new("chump").unwrap();
        let feedback = Feedback::from_raw("bbbbb").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback);
        assert_eq!(remaining, words(&["zonal", "later", "arose"]));
    }

    #[test]
    fn arose_against_later_scenario() {
        // Derived via the generation rule: AROSE vs LATER is y y b b y.
        let dictionary = words(&["arose", "raise", "later", "zonal"]);
        let guess = Word::new("arose").unwrap();
        let feedback = Feedback::simulate(&guess, &Word::new("later").unwrap());
        assert_eq!(&feedback.to_string(), "yybby");

        let remaining = filter_candidates(&dictionary, &guess, &feedback);
        // arose: 'a' yellow at its own position; raise: contains gray 's';
        // zonal: missing 'r' and 'e'.
        assert_eq!(remaining, words(&["later"]));
    }

    #[test]
    fn contradictory_feedback_empties_the_set() {
        let candidates = words(&["arose", "later"]);
        let guess = Word::new("zzzzz").unwrap();
        let feedback = Feedback::winning();

        let remaining = filter_candidates(&candidates, &guess, &feedback);
        assert!(remaining.is_empty());
    }
}
