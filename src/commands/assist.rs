//! Interactive assistant mode
//!
//! Drives a live game: suggests a guess each round, collects the feedback the
//! puzzle showed for every unsolved word, and narrows each slot until all are
//! solved or one runs out of candidates. The same loop serves both policies;
//! only guess selection differs.

use crate::core::{Feedback, FeedbackError, Word};
use crate::output::display::{print_round_header, print_slot_report, print_top_suggestions};
use crate::session::{GuessPolicy, Openers, SelectError, Session, SlotStatus};
use colored::Colorize;
use std::io::{self, Write as _};

/// Rounds after which top suggestions are shown per unsolved slot
const SUGGESTIONS_AFTER_ROUND: usize = 2;

/// Run the interactive assistant until every slot resolves or the user exits
///
/// # Errors
///
/// Returns an error on I/O failure reading stdin.
pub fn run_assist<P: GuessPolicy>(
    policy: &P,
    dictionary: Vec<Word>,
    num_slots: usize,
    openers: Openers,
) -> Result<(), String> {
    let mut session = Session::new(dictionary, num_slots, openers);
    let mut round = 0usize;

    println!("\n🧩 Solving {num_slots} word(s) with a shared guess pool.");
    println!("Every guess goes to all boards: each round, enter the feedback every unsolved word shows for it.");
    println!("Feedback guide: g = green, y = yellow, anything else = gray (b/x/n/e).");
    println!("Type 'exit' anytime to quit.\n");

    loop {
        if session.all_solved() {
            println!(
                "\n{}",
                format!("🎉 All {num_slots} word(s) solved in {round} guesses!")
                    .bright_green()
                    .bold()
            );
            return Ok(());
        }
        if session.is_finished() {
            println!("\n{}", "No active words remain.".yellow());
            return Ok(());
        }

        let guess = match policy.select_guess(&session) {
            Ok(guess) => guess,
            Err(SelectError::NoGuessAvailable) => {
                println!("\n{}", "⚠️ No guesses available.".yellow());
                return Ok(());
            }
        };

        session.record_guess(guess.clone());
        round += 1;
        print_round_header(round, &guess);

        // Gather feedback per unsolved slot; faults stay local to a slot
        let slot_count = session.slots().len();
        for index in 0..slot_count {
            if !session.slots()[index].is_active() {
                continue;
            }

            let label = session.slots()[index].label().to_string();
            let Some(feedback) = prompt_feedback(&label)? else {
                println!("\n👋 Exiting.");
                return Ok(());
            };

            let status = session.apply(index, &guess, &feedback).clone();
            print_slot_report(&label, &status, session.slots()[index].candidate_count());

            // A word solved early still has to be played on the shared
            // board; queue it so the next round offers it and the remaining
            // slots prune on its feedback
            if let SlotStatus::Solved(word) = status {
                session.enqueue_replay(word);
            }
        }

        if round >= SUGGESTIONS_AFTER_ROUND {
            for slot in session.active_slots() {
                print_top_suggestions(slot.label(), slot.candidates());
            }
        }
    }
}

/// Prompt until valid-length feedback or the exit sentinel arrives
///
/// Returns `Ok(None)` when the user types `exit`.
fn prompt_feedback(label: &str) -> Result<Option<Feedback>, String> {
    loop {
        print!("Enter feedback for {label} (e.g. gyxnb): ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        let input = input.trim().to_lowercase();

        if input == "exit" {
            return Ok(None);
        }

        match Feedback::from_raw(&input) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(FeedbackError::InvalidLength(len)) => {
                println!("{}", format!("❌ Invalid feedback length ({len}).").red());
            }
        }
    }
}
