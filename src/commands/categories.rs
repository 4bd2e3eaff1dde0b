//! Category listing command
//!
//! Summarizes which categories a word list offers and how many words each has.

use crate::wordlists::WordPool;

/// Categories of a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Where the list came from: `embedded` or a file path
    pub source: String,
    pub total: usize,
    /// Category names with entry counts, sorted by name
    pub categories: Vec<(String, usize)>,
}

/// Summarize the categories of `pool`
#[must_use]
pub fn summarize(pool: &WordPool, source: impl Into<String>) -> CategoryReport {
    CategoryReport {
        source: source.into(),
        total: pool.len(),
        categories: pool.categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS_COUNT;

    #[test]
    fn embedded_report_counts_add_up() {
        let report = summarize(&WordPool::embedded(), "embedded");

        assert_eq!(report.source, "embedded");
        assert_eq!(report.total, WORDS_COUNT);
        assert_eq!(
            report.categories.iter().map(|(_, n)| n).sum::<usize>(),
            report.total
        );
        assert!(report.categories.iter().any(|(name, _)| name == "Animais"));
    }

    #[test]
    fn empty_pool_report() {
        let report = summarize(&WordPool::default(), "empty.txt");
        assert_eq!(report.total, 0);
        assert!(report.categories.is_empty());
    }
}
