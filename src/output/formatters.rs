//! Formatting utilities shared by the console and TUI front ends

use crate::core::{LetterSet, SecretWord};
use crate::game::{HintView, RoundEnding};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Number of gallows parts; the last one completes the figure
pub const GALLOWS_PARTS: u8 = 9;

/// How a key on the keyboard should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Hit,
    Miss,
}

impl KeyState {
    #[must_use]
    pub const fn of(secret: &SecretWord, guessed: LetterSet, letter: char) -> Self {
        if !guessed.contains(letter) {
            Self::Unused
        } else if secret.contains(letter) {
            Self::Hit
        } else {
            Self::Miss
        }
    }
}

/// Word blanks separated by spaces, e.g. `G _ T _`
#[must_use]
pub fn masked_word(secret: &SecretWord, guessed: LetterSet) -> String {
    secret
        .masked(guessed)
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One trophy glyph per tournament win
#[must_use]
pub fn trophies(count: u32) -> String {
    (0..count).map(|_| "🏆").collect()
}

/// Create a progress bar string
#[must_use]
pub fn progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        let ratio = u64::from(value.min(max)) * width as u64 / u64::from(max);
        usize::try_from(ratio).unwrap_or(width).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Gallows parts to draw for `wrong` misses out of `max`
///
/// The full figure always appears exactly when the round is lost, whatever
/// the configured maximum.
#[must_use]
pub fn gallows_stage(wrong: u32, max: u32) -> u8 {
    if max == 0 {
        return GALLOWS_PARTS;
    }
    let scaled =
        (u64::from(wrong.min(max)) * u64::from(GALLOWS_PARTS)).div_ceil(u64::from(max));
    u8::try_from(scaled).unwrap_or(GALLOWS_PARTS)
}

/// ASCII gallows with `stage` parts drawn
#[must_use]
pub fn gallows_art(stage: u8) -> [&'static str; 6] {
    const BLANK: &str = "          ";
    const POLE: &str = "  |       ";

    let stage = stage.min(GALLOWS_PARTS);
    let pole = if stage >= 1 { POLE } else { BLANK };
    let top = match stage {
        0 | 1 => BLANK,
        2 => "  +-----  ",
        _ => "  +----+  ",
    };
    let rope = if stage >= 3 { "  |    |  " } else { pole };
    let head = if stage >= 4 { "  |    O  " } else { pole };
    let body = match stage {
        0..=4 => pole,
        5 => "  |    |  ",
        6 => "  |   /|  ",
        _ => "  |   /|\\ ",
    };
    let legs = match stage {
        0..=7 => pole,
        8 => "  |   /   ",
        _ => "  |   / \\ ",
    };

    [top, rope, head, body, legs, " ======== "]
}

/// Hint panel text
#[must_use]
pub fn hint_line(hint: &HintView<'_>) -> String {
    let left = hint.hints_left();
    match hint.clue {
        Some(clue) => format!("Hint: {clue} ({left} left)"),
        None => format!("Hints left: {left}"),
    }
}

/// Headline for the round-end notice
#[must_use]
pub fn ending_headline(ending: &RoundEnding) -> String {
    match ending {
        RoundEnding::Won { name, .. } => format!("🎉 {name} guessed the word!"),
        RoundEnding::Lost { .. } => "💀 Nobody saved the hangman".to_string(),
        RoundEnding::Champion {
            name,
            score,
            trophies: count,
            ..
        } => format!(
            "🏆 {name} is the grand champion with {score} points! {}",
            trophies(*count)
        ),
    }
}

/// Revealed word with its translation, if any
#[must_use]
pub fn reveal_line(ending: &RoundEnding) -> String {
    let translation = ending.translation();
    if translation.is_empty() {
        format!("The word was {}", ending.word())
    } else {
        format!("The word was {} ({translation})", ending.word())
    }
}
