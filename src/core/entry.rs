//! Word entries and the secret word derived from them

use super::LetterSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("word has no letters")]
    Empty,
    #[error("word contains '{0}', only letters A-Z are allowed")]
    InvalidCharacter(char),
    #[error("expected 4 fields (word|category|hint|translation), got {0}")]
    FieldCount(usize),
}

/// The letters to be guessed in a round
///
/// Uppercased with all whitespace removed, so "Da Vinci" plays as `DAVINCI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: LetterSet,
}

impl SecretWord {
    /// Create a secret word from raw text
    ///
    /// # Errors
    /// Returns `EntryError` if nothing is left after stripping whitespace, or if
    /// any remaining character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_party::core::SecretWord;
    ///
    /// let secret = SecretWord::new("Da Vinci").unwrap();
    /// assert_eq!(secret.as_str(), "DAVINCI");
    /// assert!(SecretWord::new("coração").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, EntryError> {
        let text: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if text.is_empty() {
            return Err(EntryError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(EntryError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// How many positions hold `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.text.chars().filter(|&c| c == letter).count()
    }

    /// True when every letter of the word has been guessed
    #[must_use]
    pub fn is_revealed_by(&self, guessed: LetterSet) -> bool {
        self.text.chars().all(|c| guessed.contains(c))
    }

    /// Letters at positions not yet revealed, one per position
    ///
    /// A letter that appears twice is listed twice.
    #[must_use]
    pub fn unrevealed(&self, guessed: LetterSet) -> Vec<char> {
        self.text.chars().filter(|&c| !guessed.contains(c)).collect()
    }

    /// Each position, `Some(letter)` if revealed
    pub fn masked(&self, guessed: LetterSet) -> impl Iterator<Item = Option<char>> + '_ {
        self.text
            .chars()
            .map(move |c| guessed.contains(c).then_some(c))
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Serialized shape of a word entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub word: String,
    pub category: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub translation: String,
}

/// One entry of a word list
///
/// Immutable once built; the secret word is validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct WordEntry {
    word: String,
    category: String,
    hint: String,
    translation: String,
    secret: SecretWord,
}

impl WordEntry {
    /// Create a validated entry
    ///
    /// # Errors
    /// Returns `EntryError` if `word` cannot be played (see [`SecretWord::new`]).
    pub fn new(
        word: impl Into<String>,
        category: impl Into<String>,
        hint: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let word = word.into();
        let secret = SecretWord::new(&word)?;
        Ok(Self {
            word,
            category: category.into(),
            hint: hint.into(),
            translation: translation.into(),
            secret,
        })
    }

    /// The word as written in the list
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }
}

impl TryFrom<RawEntry> for WordEntry {
    type Error = EntryError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Self::new(raw.word, raw.category, raw.hint, raw.translation)
    }
}

impl From<WordEntry> for RawEntry {
    fn from(entry: WordEntry) -> Self {
        Self {
            word: entry.word,
            category: entry.category,
            hint: entry.hint,
            translation: entry.translation,
        }
    }
}
