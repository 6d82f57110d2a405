//! Wordle Game - CLI
//!
//! Word guessing game with TUI and line modes, plus one-shot scoring and a
//! debounced contact-lookup demo.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::{run_lookup, run_play, score_guess},
    core::Word,
    interactive::{App, run_tui},
    logging,
    lookup::StaticDirectory,
    output::{print_lookup_outcome, print_score_result},
    session::RandomWordProvider,
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game with multiset-correct letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode (play without TUI)
    Cli,

    /// Score one guess against a known answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer word
        answer: String,
    },

    /// Search the sample contact directory through the debounce layer
    Lookup {
        /// Name fragment to search for
        query: String,
    },
}

/// Load the answer pool based on the -w flag
fn load_answer_pool(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(ANSWERS),
        path => load_from_file(path)?,
    };

    anyhow::ensure!(
        !words.is_empty(),
        "Word list '{wordlist_mode}' contains no usable words"
    );
    Ok(words)
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_answer_pool(&cli.wordlist)?;
            let provider = RandomWordProvider::new(&words);
            let app = App::new(&provider);
            run_tui(app)
        }
        Commands::Cli => {
            let words = load_answer_pool(&cli.wordlist)?;
            let provider = RandomWordProvider::new(&words);
            run_play(&provider, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, answer } => {
            let result = score_guess(&guess, &answer).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Lookup { query } => {
            let outcome = run_lookup(StaticDirectory::sample(), &query);
            print_lookup_outcome(&query, &outcome);
            Ok(())
        }
    }
}
