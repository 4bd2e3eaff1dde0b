//! Console presenter and report printing for line mode

use super::formatters::{
    KEYBOARD_ROWS, KeyState, ending_headline, gallows_art, gallows_stage, hint_line, masked_word,
    progress_bar, reveal_line, trophies,
};
use crate::commands::CategoryReport;
use crate::core::{LetterSet, Player, SecretWord};
use crate::game::{HintView, Presenter, RoundEnding};
use colored::{ColoredString, Colorize};
use std::thread;
use std::time::Duration;

/// Presenter that keeps the latest board and prints it on demand
///
/// Round endings and alerts are printed immediately; the ending is held back
/// by the configured delay so the last move is visible first.
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    delay: Duration,
    grand_win_score: u32,
    scoreboard: Vec<String>,
    word: String,
    keyboard: Vec<String>,
    gallows: [&'static str; 6],
    hint: String,
}

impl ConsolePresenter {
    #[must_use]
    pub fn new(delay: Duration, grand_win_score: u32) -> Self {
        Self {
            delay,
            grand_win_score,
            scoreboard: Vec::new(),
            word: String::new(),
            keyboard: Vec::new(),
            gallows: gallows_art(0),
            hint: String::new(),
        }
    }

    /// The current board as printable text
    #[must_use]
    pub fn board(&self) -> String {
        let mut lines = Vec::with_capacity(16);
        lines.push("─".repeat(48).cyan().to_string());
        lines.extend(self.scoreboard.iter().cloned());
        lines.push(String::new());
        lines.extend(self.gallows.iter().map(|row| (*row).to_string()));
        lines.push(String::new());
        lines.push(format!("   {}", self.word.bright_white().bold()));
        lines.push(String::new());
        lines.extend(self.keyboard.iter().cloned());
        lines.push(String::new());
        lines.push(self.hint.bright_yellow().to_string());
        lines.push("─".repeat(48).cyan().to_string());
        lines.join("\n")
    }

    pub fn print_board(&self) {
        println!("{}", self.board());
    }
}

fn player_label(player: &Player) -> ColoredString {
    let (r, g, b) = player.color.rgb();
    player.name.truecolor(r, g, b).bold()
}

impl Presenter for ConsolePresenter {
    fn scoreboard(&mut self, players: &[Player], active: usize) {
        self.scoreboard = players
            .iter()
            .enumerate()
            .map(|(seat, player)| {
                let marker = if seat == active { "▶" } else { " " };
                format!(
                    " {marker} {:<12} {:>4} {} {}",
                    player_label(player),
                    player.score,
                    progress_bar(player.score, self.grand_win_score, 10).bright_black(),
                    trophies(player.trophies)
                )
            })
            .collect();
    }

    fn word(&mut self, secret: &SecretWord, guessed: LetterSet) {
        self.word = masked_word(secret, guessed);
    }

    fn keyboard(&mut self, secret: &SecretWord, guessed: LetterSet) {
        self.keyboard = KEYBOARD_ROWS
            .iter()
            .enumerate()
            .map(|(indent, row)| {
                let keys: Vec<String> = row
                    .chars()
                    .map(|letter| {
                        let key = letter.to_string();
                        match KeyState::of(secret, guessed, letter) {
                            KeyState::Unused => key.white().to_string(),
                            KeyState::Hit => key.green().bold().to_string(),
                            KeyState::Miss => key.red().dimmed().to_string(),
                        }
                    })
                    .collect();
                format!("   {}{}", " ".repeat(indent), keys.join(" "))
            })
            .collect();
    }

    fn gallows(&mut self, wrong_guesses: u32, max_wrong_guesses: u32) {
        self.gallows = gallows_art(gallows_stage(wrong_guesses, max_wrong_guesses));
    }

    fn hint(&mut self, hint: &HintView<'_>) {
        self.hint = hint_line(hint);
    }

    fn round_over(&mut self, ending: &RoundEnding) {
        thread::sleep(self.delay);

        let rule = "═".repeat(60);
        println!("\n{}", rule.bright_cyan());
        let headline = ending_headline(ending);
        match ending {
            RoundEnding::Lost { .. } => println!("  {}", headline.red().bold()),
            RoundEnding::Won { .. } => println!("  {}", headline.bright_green().bold()),
            RoundEnding::Champion { .. } => {
                println!("  {}", "✨ T O U R N A M E N T   O V E R ✨".bright_yellow().bold());
                println!("  {}", headline.bright_green().bold());
                println!("  {}", "All scores have been reset.".bright_black());
            }
        }
        println!("  {}", reveal_line(ending).bright_white());
        println!("{}\n", rule.bright_cyan());
    }

    fn alert(&mut self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

/// Print the categories available in a word list
pub fn print_category_report(report: &CategoryReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {}",
        "WORD LIST:".bright_cyan().bold(),
        report.source.bright_yellow()
    );
    println!("{}", "═".repeat(40).cyan());

    for (name, count) in &report.categories {
        println!("   {name:<20} {}", count.to_string().bright_white());
    }

    println!("\n   {:<20} {}", "Total".bold(), report.total.to_string().bold());
}
