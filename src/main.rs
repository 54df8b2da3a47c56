//! Word Assist - CLI
//!
//! Interactive assistant and bulk evaluator for Wordle-style puzzles,
//! including multi-word games sharing one guess pool.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use word_assist::{
    commands::{run_assist, run_evaluate, run_rank, EvaluateOptions},
    core::Word,
    output::{print_evaluate_statistics, print_rank_result},
    session::{Openers, SequentialPolicy, SimultaneousPolicy},
    wordlists::{loader::load_from_file, loader::words_from_slice, DICTIONARY},
};

#[derive(Parser)]
#[command(
    name = "word_assist",
    about = "Assistant for Wordle-style puzzles, one or several words at a time",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of preset openers to play first (0-3: arose, linty, chump)
    #[arg(short = 'o', long, global = true, default_value = "1", conflicts_with = "opener")]
    openers: usize,

    /// Custom opener word, may be repeated; overrides the presets
    #[arg(long, global = true)]
    opener: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve several words at once with a shared guess pool (default)
    Assist {
        /// Number of words to solve in parallel
        #[arg(short = 'n', long, default_value = "1")]
        words: usize,
    },

    /// Solve words one at a time, in order
    Sequence {
        /// Number of words to solve
        #[arg(short = 'n', long, default_value = "1")]
        words: usize,
    },

    /// Run the solver against every dictionary word and report statistics
    Evaluate {
        /// Limit evaluation to the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Evaluate a random sample of N words instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,
    },

    /// Rank dictionary words by aggregate letter frequency
    Rank {
        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Load the dictionary from the embedded list or a file
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}"))?,
    };
    if words.is_empty() {
        bail!("Wordlist '{wordlist}' contains no usable words");
    }
    Ok(words)
}

/// Build the opener configuration from the CLI flags
fn build_openers(preset_count: usize, custom: &[String]) -> Result<Openers> {
    if custom.is_empty() {
        return Openers::preset(preset_count)
            .ok_or_else(|| anyhow!("--openers must be between 0 and 3"));
    }

    let words: Result<Vec<Word>> = custom
        .iter()
        .map(|text| Word::new(text.as_str()).map_err(|e| anyhow!("Invalid opener '{text}': {e}")))
        .collect();
    Ok(Openers::custom(words?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let openers = build_openers(cli.openers, &cli.opener)?;

    let command = cli.command.unwrap_or(Commands::Assist { words: 1 });

    match command {
        Commands::Assist { words } => {
            if words == 0 {
                bail!("Number of words must be at least 1");
            }
            run_assist(&SimultaneousPolicy, dictionary, words, openers).map_err(|e| anyhow!(e))
        }
        Commands::Sequence { words } => {
            if words == 0 {
                bail!("Number of words must be at least 1");
            }
            run_assist(&SequentialPolicy, dictionary, words, openers).map_err(|e| anyhow!(e))
        }
        Commands::Evaluate { limit, sample } => {
            let options = EvaluateOptions { limit, sample };
            let stats = run_evaluate(&dictionary, &openers, &options);
            print_evaluate_statistics(&stats, openers.as_slice());
            Ok(())
        }
        Commands::Rank { top } => {
            let result = run_rank(&dictionary, top);
            print_rank_result(&result);
            Ok(())
        }
    }
}
