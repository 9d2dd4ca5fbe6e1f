//! Dictionary word representation
//!
//! A Word stores a normalized (trimmed, lowercased) dictionary word together
//! with its character sequence for position-indexed access.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalized dictionary word
///
/// Construction lowercases and trims the input. Positions are character
/// indices, not byte offsets, so non-ASCII word lists behave correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain interior whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Leading and trailing whitespace is trimmed, and the result is
    /// lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - The trimmed input contains interior whitespace
    ///
    /// # Examples
    /// ```
    /// use word_network::core::Word;
    ///
    /// let word = Word::new("  Cat\n").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let chars: Vec<char> = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the word has no characters
    ///
    /// Never true for a successfully constructed Word; provided to satisfy
    /// the conventional `len`/`is_empty` pairing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// The word with the character at `position` removed
    ///
    /// This is the "reduced form" used as a grouping key during graph
    /// construction; the result is not necessarily a dictionary word.
    ///
    /// # Examples
    /// ```
    /// use word_network::core::Word;
    ///
    /// let word = Word::new("cast").unwrap();
    /// assert_eq!(word.reduced(2), "cat");
    /// ```
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn reduced(&self, position: usize) -> String {
        assert!(position < self.chars.len(), "position out of range");
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != position)
            .map(|(_, &c)| c)
            .collect()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

// Hash and Eq delegate to the text, so str lookups into Word-keyed maps
// stay consistent with Word lookups.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_normalizes() {
        let word = Word::new("  CaT\n").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("BLOCK").unwrap();
        assert_eq!(word2.text(), "block");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
        assert!(matches!(Word::new("\t\n"), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_interior_whitespace() {
        assert!(matches!(
            Word::new("two words"),
            Err(WordError::ContainsWhitespace)
        ));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("cast").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(1), 'a');
        assert_eq!(word.char_at(2), 's');
        assert_eq!(word.char_at(3), 't');
    }

    #[test]
    fn word_reduced() {
        let word = Word::new("cast").unwrap();
        assert_eq!(word.reduced(0), "ast");
        assert_eq!(word.reduced(1), "cst");
        assert_eq!(word.reduced(2), "cat");
        assert_eq!(word.reduced(3), "cas");
    }

    #[test]
    fn word_reduced_non_ascii_uses_char_positions() {
        let word = Word::new("naïve").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.reduced(2), "nave");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("CAT").unwrap();
        let word3 = Word::new("cot").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_borrow_str_lookup() {
        use rustc_hash::FxHashSet;

        let mut set: FxHashSet<Word> = FxHashSet::default();
        set.insert(Word::new("cat").unwrap());

        assert!(set.contains("cat"));
        assert!(!set.contains("cot"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Block").unwrap();
        assert_eq!(format!("{word}"), "block");
    }
}
