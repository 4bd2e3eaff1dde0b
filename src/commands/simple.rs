//! Simple interactive CLI mode
//!
//! Line-oriented hangman without the TUI: one letter or command per line.

use crate::core::normalize_letter;
use crate::game::{Controller, GuessOutcome, HintOutcome};
use crate::output::ConsolePresenter;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(char),
    Hint,
    Undo,
    Pass,
    Next,
    Restart,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parse a line typed by the player
///
/// A single letter is a guess; commands start with `:`.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(command) = line.strip_prefix(':') {
        return match command.trim().to_lowercase().as_str() {
            "hint" | "h" => Input::Hint,
            "undo" | "u" => Input::Undo,
            "pass" | "p" => Input::Pass,
            "next" | "n" => Input::Next,
            "restart" | "r" => Input::Restart,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Invalid(line.to_string()),
        };
    }

    let mut chars = line.chars();
    match (chars.next().and_then(normalize_letter), chars.next()) {
        (Some(letter), None) => Input::Guess(letter),
        _ => Input::Invalid(line.to_string()),
    }
}

fn print_help() {
    println!("Type a letter to guess it. Commands:");
    println!("  :hint     use a hint (first shows the clue, then reveals letters)");
    println!("  :undo     take back the last action");
    println!("  :pass     give the turn to the next player");
    println!("  :next     skip to another word");
    println!("  :restart  new tournament (scores reset, trophies kept)");
    println!("  :quit     leave\n");
}

/// Run the simple interactive CLI mode
///
/// A round must already have been started on `controller`.
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails, or if a new
/// round cannot be started.
pub fn run_simple(controller: &mut Controller<ConsolePresenter>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            Hangman Party - Line Mode          ║");
    println!("╚══════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        controller.presenter().print_board();
        if !controller.session().is_active() {
            println!(
                "{}",
                "Round over. :next for another word, :restart for a new tournament.".bright_black()
            );
        }

        let player = &controller.session().active_player().name;
        print!("{player}> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_input(&line) {
            Input::Guess(letter) => report_guess(letter, controller.guess(letter)),
            Input::Hint => match controller.use_hint() {
                HintOutcome::Ignored => println!("No hints available."),
                HintOutcome::Clue => println!("💡 Clue revealed."),
                HintOutcome::Letter(letter) => println!("💡 Revealed {}", letter.to_string().green()),
            },
            Input::Undo => {
                if controller.undo() {
                    println!("↩ Undone.");
                } else {
                    println!("Nothing to undo.");
                }
            }
            Input::Pass => {
                if !controller.pass_turn() {
                    println!("Passing needs an active round and two or more players.");
                }
            }
            Input::Next => controller.next_word()?,
            Input::Restart => {
                controller.new_tournament()?;
                println!("\n🔄 New tournament started!\n");
            }
            Input::Help => print_help(),
            Input::Quit => break,
            Input::Empty => {}
            Input::Invalid(text) => println!("❌ '{text}' is not a letter or command (:help)"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn report_guess(letter: char, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Ignored => println!("{letter} was already tried (or the round is over)."),
        GuessOutcome::Hit {
            occurrences,
            points,
        } => println!(
            "{} {letter} appears {occurrences}x (+{points})",
            "✓".green().bold()
        ),
        GuessOutcome::Miss { wrong_guesses } => println!(
            "{} no {letter} ({wrong_guesses} wrong)",
            "✗".red().bold()
        ),
    }
}
