//! Word list loading utilities
//!
//! Word lists come either from the embedded table or from a file. Files ending
//! in `.json` hold an array of `{word, category, hint, translation}` objects;
//! any other file is read as one `WORD|CATEGORY|HINT|TRANSLATION` entry per line,
//! with `#` starting a comment line.

use crate::core::{EntryError, RawEntry, WordEntry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for word list files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON word list")]
    Json(#[from] serde_json::Error),
}

/// Parse a single `WORD|CATEGORY|HINT|TRANSLATION` line
///
/// # Errors
/// Returns `EntryError::FieldCount` if the line does not have exactly four
/// fields, or the word's validation error.
///
/// # Examples
/// ```
/// use hangman_party::wordlists::loader::parse_line;
///
/// let entry = parse_line("GATO|Animais|Mia|Cat").unwrap();
/// assert_eq!(entry.translation(), "Cat");
/// assert!(parse_line("GATO|Animais").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<WordEntry, EntryError> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [word, category, hint, translation] => {
            WordEntry::new(*word, *category, *hint, *translation)
        }
        _ => Err(EntryError::FieldCount(fields.len())),
    }
}

/// Parse pipe-separated text, skipping blanks, comments and invalid lines
#[must_use]
pub fn parse_text(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match parse_line(trimmed) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(line = index + 1, error = %err, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Parse a JSON array of entries, skipping entries whose word is invalid
///
/// # Errors
/// Returns `LoadError::Json` if the document is not an array of entry objects.
pub fn parse_json(content: &str) -> Result<Vec<WordEntry>, LoadError> {
    let raw: Vec<RawEntry> = serde_json::from_str(content)?;
    let entries = raw
        .into_iter()
        .filter_map(|raw| {
            let word = raw.word.clone();
            WordEntry::try_from(raw)
                .map_err(|err| warn!(%word, error = %err, "skipping word list entry"))
                .ok()
        })
        .collect();
    Ok(entries)
}

/// Load entries from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Json`
/// if a `.json` file is malformed.
///
/// # Examples
/// ```no_run
/// use hangman_party::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)
    };

    debug!(path = %path.display(), count = entries.len(), "loaded word list");
    Ok(entries)
}

/// Convert embedded tuples to entries, skipping invalid ones
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, &str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, category, hint, translation)| {
            WordEntry::new(word, category, hint, translation).ok()
        })
        .collect()
}
