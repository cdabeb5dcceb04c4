//! Neighbor enumeration over a `WordIndex`

use super::index::WordIndex;
use crate::core::Word;

/// Dictionary words exactly one substitution away from `word`
///
/// Walks the bucket of each of `word`'s wildcard keys and skips `word` itself.
/// `word` does not have to be in the dictionary. A dictionary that lists the
/// same word twice yields that neighbor twice; callers that need a set must
/// filter (the search does, through its visited map).
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::ladder::{Indexer, LadderConfig, adjacent};
///
/// let words: Vec<Word> = ["smart", "start", "stark", "seven"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let index = Indexer::from_config(&LadderConfig::default()).build(words).unwrap();
///
/// let start = Word::new("start").unwrap();
/// let neighbors: Vec<&str> = adjacent(&index, &start).map(Word::text).collect();
/// assert_eq!(neighbors, vec!["smart", "stark"]);
/// ```
pub fn adjacent<'a>(index: &'a WordIndex, word: &'a Word) -> impl Iterator<Item = &'a Word> + 'a {
    (0..word.len().min(index.word_len())).flat_map(move |position| {
        index
            .bucket(position, &word.wildcard(position))
            .filter(move |&candidate| candidate != word)
    })
}
