//! Hidden-word catalog
//!
//! Filters raw candidate words into validated isograms and buckets them by
//! length, one bucket per word length 4..=8. Built once at startup,
//! immutable thereafter.

mod embedded;
pub mod loader;

pub use embedded::{HIDDEN_WORDS, HIDDEN_WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error type for catalog construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No candidate survived filtering; the game cannot start
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "word list contains no valid hidden words (isograms of {} to {} letters)",
                Word::MIN_LEN,
                Word::MAX_LEN
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Length-bucketed collection of valid hidden words
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    buckets: FxHashMap<usize, Vec<Word>>,
    total: usize,
}

impl Catalog {
    /// Build a catalog from raw candidate strings.
    ///
    /// Candidates that are not isograms of 4 to 8 ASCII letters are
    /// silently skipped, duplicates are kept once. Order within a bucket
    /// follows first appearance.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no candidate survives filtering —
    /// a startup configuration error, the game cannot run without words.
    ///
    /// # Examples
    /// ```
    /// use bullcow::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_candidates(["tank", "ghost", "balloon", "cat"]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_candidates<I, S>(candidates: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut total = 0;

        for candidate in candidates {
            if let Ok(word) = Word::new(candidate.as_ref())
                && seen.insert(word.clone())
            {
                buckets.entry(word.len()).or_default().push(word);
                total += 1;
            }
        }

        if total == 0 {
            return Err(CatalogError::Empty);
        }

        Ok(Self { buckets, total })
    }

    /// Number of words in the catalog
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// True if the catalog holds no words (never true for a constructed catalog)
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All words of a given length, in catalog order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present in the catalog, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Pick a uniformly random word of the given length.
    ///
    /// Returns `None` if the catalog has no words of that length. Injecting
    /// the rng keeps selection deterministic under a seeded source.
    pub fn pick<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.words_of_length(length).choose(rng)
    }

    /// Iterate over every word in the catalog
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.buckets.values().flat_map(|bucket| bucket.iter())
    }
}
