//! Word ladder paths
//!
//! A Path is an ordered sequence of words, source first and destination last.

use super::Word;
use std::fmt;

/// An ordered word ladder from source to destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    words: Vec<Word>,
}

impl Path {
    /// Wrap an already ordered sequence of words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The words along the ladder, source first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of single-letter changes (edges) along the ladder
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Number of words along the ladder
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Words strictly between source and destination
    #[must_use]
    pub fn interior(&self) -> &[Word] {
        if self.words.len() <= 2 {
            &[]
        } else {
            &self.words[1..self.words.len() - 1]
        }
    }

    /// True if every consecutive pair differs in exactly one position
    #[must_use]
    pub fn is_ladder(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].is_adjacent_to(&pair[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
