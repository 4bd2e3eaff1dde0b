//! Hangman Party
//!
//! Multiplayer hangman for the terminal: players take turns guessing letters,
//! score points per revealed letter and per solved word, and the first to the
//! grand-win score takes a trophy and starts a new tournament.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_party::core::{GameConfig, WordEntry};
//! use hangman_party::game::{Controller, GuessOutcome, NullPresenter, Session};
//! use hangman_party::wordlists::WordPool;
//!
//! let session = Session::from_names(1, &["Ana"]).unwrap();
//! let mut game = Controller::new(session, WordPool::embedded(), GameConfig::default(), NullPresenter);
//! game.start_round_with(WordEntry::new("gato", "Animais", "Mia", "Cat").unwrap());
//!
//! assert_eq!(game.guess('g'), GuessOutcome::Hit { occurrences: 1, points: 10 });
//! assert!(matches!(game.guess('z'), GuessOutcome::Miss { wrong_guesses: 1 }));
//! ```

// Core domain types
pub mod core;

// Round/turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
