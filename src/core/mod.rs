//! Core domain types for hangman
//!
//! Letters, word entries, players and rules. Nothing here knows about turns,
//! history or presentation.

mod config;
mod entry;
mod letters;
mod player;

pub use config::GameConfig;
pub use entry::{EntryError, RawEntry, SecretWord, WordEntry};
pub use letters::{LetterSet, normalize_letter};
pub use player::{Player, PlayerColor};
