//! Word corpus: the input word list grouped by length
//!
//! A Corpus is built once from raw input lines and is immutable afterwards.
//! It also provides the content fingerprint used as the graph cache key.

pub mod loader;

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

pub use loader::{CorpusError, load_from_file};

/// An immutable mapping from word length to the set of words of that length
///
/// Words are deduplicated within a bucket; every word in bucket `L` has
/// character length exactly `L`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    buckets: FxHashMap<usize, FxHashSet<Word>>,
}

impl Corpus {
    /// Build a corpus from raw input lines
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped. Empty
    /// input yields an empty corpus.
    ///
    /// # Examples
    /// ```
    /// use word_network::corpus::Corpus;
    ///
    /// let corpus = Corpus::from_lines(["Cat", "cot", "  at ", ""]);
    /// assert_eq!(corpus.word_count(), 3);
    /// assert!(corpus.contains("cat"));
    /// assert!(corpus.contains("at"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: FxHashMap<usize, FxHashSet<Word>> = FxHashMap::default();

        for line in lines {
            // Whitespace-only lines fail Word::new and are skipped
            if let Ok(word) = Word::new(line.as_ref()) {
                buckets.entry(word.len()).or_default().insert(word);
            }
        }

        Self { buckets }
    }

    /// The set of words of length `len`, if any exist
    #[inline]
    #[must_use]
    pub fn bucket(&self, len: usize) -> Option<&FxHashSet<Word>> {
        self.buckets.get(&len)
    }

    /// Iterate over (length, bucket) pairs in unspecified order
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &FxHashSet<Word>)> {
        self.buckets.iter().map(|(&len, set)| (len, set))
    }

    /// Word lengths present in the corpus, sorted ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of distinct words across all buckets
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(FxHashSet::len).sum()
    }

    /// True if the corpus holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// True if `word` (already normalized) is in the corpus
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Stable content fingerprint, used as the graph cache key
    ///
    /// CRC32 over the sorted word list combined with the word count, so the
    /// value is independent of input order and bucket iteration order. Any
    /// change to the corpus contents produces a different fingerprint with
    /// overwhelming probability.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut words: Vec<&str> = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(Word::text))
            .collect();
        words.sort_unstable();

        let mut hasher = crc32fast::Hasher::new();
        for word in &words {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }

        (u64::from(hasher.finalize()) << 32) | (words.len() as u64 & 0xFFFF_FFFF)
    }
}
