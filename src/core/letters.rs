//! Guessed-letter bookkeeping
//!
//! Letters are restricted to the 26 ASCII letters A-Z, so a set of them fits in
//! a single `u32` bitmask. The set is `Copy`, which keeps undo snapshots cheap.

use std::fmt;

/// Normalize raw input into a guessable letter
///
/// Returns the uppercase letter for ASCII alphabetic input, `None` for anything
/// else (digits, punctuation, accented letters).
///
/// # Examples
/// ```
/// use hangman_party::core::normalize_letter;
///
/// assert_eq!(normalize_letter('g'), Some('G'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[inline]
#[must_use]
pub const fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

/// A set of letters A-Z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: char) -> Option<u32> {
        match normalize_letter(letter) {
            Some(upper) => Some(1 << (upper as u32 - 'A' as u32)),
            None => None,
        }
    }

    /// Check whether `letter` is in the set (case-insensitive)
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Insert a letter
    ///
    /// Returns `true` only when the letter was valid and not already present.
    pub const fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
