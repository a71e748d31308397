//! Hádej slovo - CLI
//!
//! Czech word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hadej_slovo::{
    commands::{run_simple, score_words},
    config::{resolve_config, resolve_vocabulary},
    game::{Controller, Session, Statistics},
    output::print_score_result,
    wordlists::RandomPicker,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hadej-slovo",
    about = "Guess the hidden five-letter Czech word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./hadej-slovo.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Wordlist: 'embedded' or path to a file with one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Guesses per game
    #[arg(short = 'm', long, global = true)]
    max_guesses: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game without TUI
    Simple,

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        solution: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "hadej_slovo=debug"
    } else {
        "hadej_slovo=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    // Scoring needs neither config nor vocabulary
    let simple = match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Score { guess, solution } => return run_score_command(&guess, &solution),
        Commands::Play => false,
        Commands::Simple => true,
    };

    let config = resolve_config(cli.config.as_deref(), cli.max_guesses)?;
    let vocabulary = resolve_vocabulary(cli.wordlist.as_deref(), &config)?;
    info!(
        words = vocabulary.len(),
        max_guesses = config.max_guesses,
        "starting"
    );

    let session = Session::new(&vocabulary, RandomPicker::default(), config.max_guesses);
    let controller = Controller::new(session, config.flash_duration());

    if simple {
        run_simple_command(controller, config.max_guesses)
    } else {
        run_play_command(controller)
    }
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_words(guess, solution)?;
    print_score_result(&result);
    Ok(())
}

fn run_simple_command(
    mut controller: Controller<'_, RandomPicker>,
    max_guesses: usize,
) -> Result<()> {
    let mut stats = Statistics::new(max_guesses);
    run_simple(&mut controller, &mut stats).context("line-mode game failed")
}

fn run_play_command(controller: Controller<'_, RandomPicker>) -> Result<()> {
    use hadej_slovo::interactive::{App, run_tui};

    run_tui(App::new(controller))
}
