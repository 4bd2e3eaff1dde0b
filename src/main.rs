//! Hangman Party - CLI
//!
//! Multiplayer hangman with a TUI (default) and a plain line mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_party::{
    commands::{run_simple, summarize},
    core::GameConfig,
    game::{Controller, Session},
    interactive::{App, SetupState, run_tui},
    output::{ConsolePresenter, print_category_report},
    wordlists::{WordPool, loader::load_from_file},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_party",
    about = "Multiplayer hangman with turns, hints, undo and tournaments",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of players (1-5)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=5)
    )]
    players: u8,

    /// Player name, in seat order (repeatable)
    #[arg(short = 'n', long = "name", global = true)]
    names: Vec<String>,

    /// Only play words from this category
    #[arg(short, long, global = true)]
    category: Option<String>,

    /// Word list file: WORD|CATEGORY|HINT|TRANSLATION lines, or a .json array
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wrong guesses allowed per round
    #[arg(
        long,
        global = true,
        default_value_t = GameConfig::DEFAULT_MAX_WRONG_GUESSES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_wrong: u32,

    /// Hints per round (the first shows the clue, the rest reveal letters)
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_MAX_HINTS)]
    max_hints: u32,

    /// Where to write logs (filter with RUST_LOG)
    #[arg(long, global = true, default_value = "hangman_party.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List the categories in the word list
    Categories,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_wrong_guesses: self.max_wrong,
            max_hints: self.max_hints,
            ..GameConfig::default()
        }
    }
}

/// Logs go to a file so they never draw over the TUI
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Load the word list selected by `-w`
///
/// Returns the pool and a label for where it came from.
fn load_wordlist(wordlist: Option<&Path>) -> Result<(WordPool, String)> {
    match wordlist {
        None => Ok((WordPool::embedded(), "embedded".to_string())),
        Some(path) => {
            let entries = load_from_file(path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?;
            Ok((WordPool::new(entries), path.display().to_string()))
        }
    }
}

/// Reject a category that has no words before any UI starts
fn check_category(pool: &WordPool, category: Option<&str>) -> Result<()> {
    if let Some(category) = category
        && pool.filtered(category).is_empty()
    {
        bail!("No words in category '{category}' (see `hangman_party categories`)");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let (pool, source) = load_wordlist(cli.wordlist.as_deref())?;
    info!(source = %source, words = pool.len(), "word list loaded");

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, pool),
        Commands::Simple => run_simple_command(&cli, &pool),
        Commands::Categories => {
            print_category_report(&summarize(&pool, source));
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, pool: WordPool) -> Result<()> {
    check_category(&pool, cli.category.as_deref())?;

    let setup = SetupState::new(
        &pool,
        usize::from(cli.players),
        &cli.names,
        cli.category.as_deref(),
    );
    let app = App::new(pool, cli.game_config(), setup, cli.seed);
    run_tui(app)
}

fn run_simple_command(cli: &Cli, pool: &WordPool) -> Result<()> {
    check_category(pool, cli.category.as_deref())?;
    let pool = match cli.category.as_deref() {
        Some(category) => pool.filtered(category),
        None => pool.clone(),
    };

    let config = cli.game_config();
    let session = Session::from_names(usize::from(cli.players), &cli.names)?;
    let presenter = ConsolePresenter::new(config.round_end_delay, config.grand_win_score);
    let mut controller = Controller::new(session, pool, config, presenter);
    if let Some(seed) = cli.seed {
        controller = controller.with_seed(seed);
    }

    controller.start_round()?;
    run_simple(&mut controller)
}
