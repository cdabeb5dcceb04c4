//! Ladder word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Its wildcard keys
//! (the word with one position erased) group words that are one substitution apart.

use std::fmt;
use thiserror::Error;

/// A dictionary word made of lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters: {0:?}")]
    InvalidCharacters(String),
}

/// A word with one character position erased
///
/// Two distinct words share the key for position `p` iff they differ only at `p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardKey(String);

impl WildcardKey {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WildcardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than `a..=z`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("smart").unwrap();
    /// assert_eq!(word.text(), "smart");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sm4rt").is_err());
    /// assert!(Word::new("Smart").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The wildcard key with `position` erased
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("seven").unwrap();
    /// assert_eq!(word.wildcard(0).as_str(), "even");
    /// assert_eq!(word.wildcard(2).as_str(), "seen");
    /// ```
    #[must_use]
    pub fn wildcard(&self, position: usize) -> WildcardKey {
        let mut key = String::with_capacity(self.text.len() - 1);
        key.push_str(&self.text[..position]);
        key.push_str(&self.text[position + 1..]);
        WildcardKey(key)
    }

    /// The single position at which `self` and `other` differ
    ///
    /// Returns `None` when the words have different lengths, are identical,
    /// or differ in more than one position.
    #[must_use]
    pub fn changed_position(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        let mut diffs = self
            .text
            .bytes()
            .zip(other.text.bytes())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (diffs.next(), diffs.next()) {
            (Some(position), None) => Some(position),
            _ => None,
        }
    }

    /// True if the words are exactly one substitution apart
    #[inline]
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.changed_position(other).is_some()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
