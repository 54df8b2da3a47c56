//! Bulk evaluation of the solver over the dictionary
//!
//! For each solution word, plays the solver against a deterministic oracle
//! (feedback simulated with the canonical generation rule) and collects
//! success and guess-count statistics.

use crate::core::{Feedback, Word};
use crate::session::{GuessPolicy, Openers, SequentialPolicy, Session, SlotStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Maximum guesses per word, standard puzzle rules
const MAX_GUESSES: usize = 6;

/// Options for an evaluation run
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Evaluate only the first N dictionary words
    pub limit: Option<usize>,
    /// Evaluate a random sample of N words instead of a prefix
    pub sample: Option<usize>,
}

/// Outcome of solving one word
#[derive(Debug, Clone)]
pub struct WordTrial {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Aggregate statistics from an evaluation run
#[derive(Debug)]
pub struct EvaluateStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub hardest_words: Vec<(String, usize)>,
    pub unsolved_words: Vec<String>,
    pub total_time: Duration,
}

/// Solve one known solution with the shared-core loop
///
/// Openers play first; afterwards the frequency scorer picks from the
/// surviving candidates. A trial ends on winning feedback, on exhaustion, or
/// at the guess cap.
fn solve_one(dictionary: &[Word], openers: &Openers, solution: &Word) -> WordTrial {
    let mut session = Session::new(dictionary.to_vec(), 1, openers.clone());
    let policy = SequentialPolicy;
    let mut guesses = Vec::new();
    let mut success = false;

    for _ in 0..MAX_GUESSES {
        let Ok(guess) = policy.select_guess(&session) else {
            break;
        };
        guesses.push(guess.text().to_string());
        session.record_guess(guess.clone());

        let feedback = Feedback::simulate(&guess, solution);
        if feedback.is_winning() {
            success = true;
            break;
        }

        match session.apply(0, &guess, &feedback).clone() {
            // Early solve: the surviving candidate is the solution, playing
            // it costs one more guess
            SlotStatus::Solved(word) => {
                if guesses.len() < MAX_GUESSES {
                    guesses.push(word.text().to_string());
                    success = true;
                }
                break;
            }
            SlotStatus::Exhausted => break,
            SlotStatus::Active => {}
        }
    }

    WordTrial {
        word: solution.text().to_string(),
        guesses,
        success,
    }
}

/// Run the solver against every selected solution word
///
/// Trials are independent, so they run in parallel.
#[must_use]
pub fn run_evaluate(
    dictionary: &[Word],
    openers: &Openers,
    options: &EvaluateOptions,
) -> EvaluateStatistics {
    let sampled: Vec<Word>;
    let test_words: &[Word] = if let Some(n) = options.sample {
        sampled = dictionary
            .choose_multiple(&mut rand::rng(), n)
            .cloned()
            .collect();
        &sampled
    } else if let Some(n) = options.limit {
        &dictionary[..n.min(dictionary.len())]
    } else {
        dictionary
    };

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let trials: Vec<WordTrial> = test_words
        .par_iter()
        .map(|solution| {
            let trial = solve_one(dictionary, openers, solution);
            pb.inc(1);
            trial
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    collect_statistics(trials, total_time)
}

fn collect_statistics(trials: Vec<WordTrial>, total_time: Duration) -> EvaluateStatistics {
    let total_words = trials.len();
    let solved = trials.iter().filter(|t| t.success).count();
    let failed = total_words - solved;

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for trial in trials.iter().filter(|t| t.success) {
        *guess_distribution.entry(trial.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = trials
        .iter()
        .filter(|t| t.success)
        .map(|t| t.guesses.len())
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<(String, usize)> = trials
        .iter()
        .filter(|t| t.success && t.guesses.len() >= 5)
        .map(|t| (t.word.clone(), t.guesses.len()))
        .collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    let unsolved_words: Vec<String> = trials
        .iter()
        .filter(|t| !t.success)
        .map(|t| t.word.clone())
        .take(10)
        .collect();

    EvaluateStatistics {
        total_words,
        solved,
        failed,
        guess_distribution,
        average_guesses,
        hardest_words,
        unsolved_words,
        total_time,
    }
}
