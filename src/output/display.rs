//! Display functions for command results

use super::formatters::distribution_bar;
use crate::commands::{EvaluateStatistics, RankResult};
use crate::core::{top_scored, Word};
use crate::session::SlotStatus;
use colored::Colorize;

/// Suggestions shown per slot after the opening rounds
const TOP_SUGGESTIONS: usize = 3;

/// Announce the shared guess for a round
pub fn print_round_header(round: usize, guess: &Word) {
    println!(
        "\n🔍 Suggested guess #{round}: {}",
        guess.text().to_uppercase().bright_yellow().bold()
    );
}

/// Report one slot's state after applying feedback
pub fn print_slot_report(label: &str, status: &SlotStatus, remaining: usize) {
    match status {
        SlotStatus::Solved(word) => {
            println!(
                "{}",
                format!("✅ {label} solved! The word is {}", word.text().to_uppercase())
                    .green()
                    .bold()
            );
        }
        SlotStatus::Exhausted => {
            println!(
                "{}",
                format!("❌ No candidates remain for {label}; its feedback history is contradictory.")
                    .red()
            );
        }
        SlotStatus::Active => {
            println!("{remaining} words left for {label}.");
        }
    }
}

/// Show the highest-scoring candidates for a slot
pub fn print_top_suggestions(label: &str, candidates: &[Word]) {
    let top = top_scored(candidates, &[], TOP_SUGGESTIONS);
    let rendered: Vec<String> = top
        .iter()
        .map(|(word, score)| format!("{} ({score})", word.text()))
        .collect();
    println!("🤖 {label}: {}", rendered.join(", "));
}

/// Print aggregate evaluation statistics
pub fn print_evaluate_statistics(stats: &EvaluateStatistics, openers: &[Word]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let opener_texts: Vec<&str> = openers.iter().map(Word::text).collect();
    println!(
        "\n📊 Openers: {}",
        if opener_texts.is_empty() {
            "(none)".to_string()
        } else {
            opener_texts.join(" + ")
        }
    );
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for guesses in 1..=6 {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("   {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.unsolved_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        for word in &stats.unsolved_words {
            println!("   {}", word.to_uppercase().red());
        }
    }
}

/// Print a dictionary ranking
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " Top {} of {} words by letter frequency ",
        result.entries.len(),
        result.total_words
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (word, score)) in result.entries.iter().enumerate() {
        println!(
            "  {:3}. {} ({score})",
            i + 1,
            word.text().to_uppercase().bright_white().bold()
        );
    }
}
