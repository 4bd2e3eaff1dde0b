//! Word lists for hangman
//!
//! Provides the embedded word list and the pool a round draws its secret from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordEntry;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Entries a round can draw from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    entries: Vec<WordEntry>,
}

impl WordPool {
    #[must_use]
    pub const fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Pool built from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::entries_from_slice(WORDS))
    }

    /// Entries whose category matches `category`, ignoring case
    #[must_use]
    pub fn filtered(&self, category: &str) -> Self {
        let wanted = category.trim().to_lowercase();
        Self::new(
            self.entries
                .iter()
                .filter(|entry| entry.category().to_lowercase() == wanted)
                .cloned()
                .collect(),
        )
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories with their entry counts, sorted by name
    #[must_use]
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for entry in &self.entries {
            *counts.entry(entry.category()).or_default() += 1;
        }

        let mut categories: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        categories
    }

    /// Pick a uniformly random entry, `None` when the pool is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordEntry> {
        self.entries.choose(rng)
    }
}

impl FromIterator<WordEntry> for WordPool {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
