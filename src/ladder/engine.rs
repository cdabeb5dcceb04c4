//! Main word ladder interface

use super::config::LadderConfig;
use super::error::{LadderError, ValidationError};
use super::index::{Indexer, check_dictionary_lengths};
use super::search::PathFinder;
use crate::core::{Path, Word};

/// Word ladder solver
///
/// Validates the inputs, builds a fresh index for every query and runs the
/// breadth-first search over it. Nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLadder {
    config: LadderConfig,
}

impl WordLadder {
    #[must_use]
    pub const fn new(config: LadderConfig) -> Self {
        Self { config }
    }

    /// Find a shortest ladder from `src` to `dst` through `dictionary`
    ///
    /// Returns `Ok(None)` when no ladder exists.
    ///
    /// # Errors
    ///
    /// Returns `LadderError::Validation` if `src`, `dst` and the dictionary
    /// words do not all share one length, and `LadderError::Construction` if
    /// the parallel index build fails or times out.
    pub fn find_shortest_path(
        &self,
        src: &Word,
        dst: &Word,
        dictionary: &[Word],
    ) -> Result<Option<Path>, LadderError> {
        validate(src, dst, dictionary)?;

        if src == dst {
            return Ok(Some(Path::new(vec![src.clone()])));
        }

        let index = Indexer::from_config(&self.config).build_checked(dictionary, src.len())?;
        Ok(PathFinder::new(&index).search(src, dst))
    }
}

/// Find a shortest ladder with the default configuration
///
/// # Errors
///
/// See [`WordLadder::find_shortest_path`].
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::ladder::find_shortest_path;
///
/// let dictionary: Vec<Word> = ["cord", "card", "ward", "warm"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let src = Word::new("cold").unwrap();
/// let dst = Word::new("warm").unwrap();
///
/// let path = find_shortest_path(&src, &dst, &dictionary).unwrap().unwrap();
/// assert_eq!(path.to_string(), "cold -> cord -> card -> ward -> warm");
/// ```
pub fn find_shortest_path(
    src: &Word,
    dst: &Word,
    dictionary: &[Word],
) -> Result<Option<Path>, LadderError> {
    WordLadder::default().find_shortest_path(src, dst, dictionary)
}

fn validate(src: &Word, dst: &Word, dictionary: &[Word]) -> Result<(), ValidationError> {
    if src.len() != dst.len() {
        return Err(ValidationError::EndpointLengthMismatch {
            src: src.text().to_string(),
            src_len: src.len(),
            dst: dst.text().to_string(),
            dst_len: dst.len(),
        });
    }
    check_dictionary_lengths(dictionary, src.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::error::ConstructionError;
    use std::collections::HashSet;
    use std::num::NonZeroUsize;
    use std::time::Duration;

    fn words_of(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn chain_dictionary() -> Vec<Word> {
        words_of(&[
            "smart", "start", "stark", "stack", "slack", "black", "blank", "bland", "brand",
            "braid", "brain",
        ])
    }

    #[test]
    fn smart_to_brain() {
        let dictionary = chain_dictionary();
        let src = Word::new("smart").unwrap();
        let dst = Word::new("brain").unwrap();

        let path = find_shortest_path(&src, &dst, &dictionary)
            .unwrap()
            .unwrap();

        assert_eq!(path.steps(), 10);
        assert_eq!(path.source(), Some(&src));
        assert_eq!(path.destination(), Some(&dst));
        assert!(path.is_ladder());

        let members: HashSet<&Word> = dictionary.iter().collect();
        assert!(path.words().iter().all(|w| members.contains(w)));
    }

    #[test]
    fn repeated_calls_agree() {
        let dictionary = chain_dictionary();
        let src = Word::new("smart").unwrap();
        let dst = Word::new("brain").unwrap();

        let first = find_shortest_path(&src, &dst, &dictionary).unwrap();
        let second = find_shortest_path(&src, &dst, &dictionary).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ties_break_the_same_way_for_any_thread_count() {
        // Two equally short ladders: cold-cord-card-ward-warm and cold-wold-word-ward-warm
        let dictionary = words_of(&["cord", "card", "ward", "wold", "word"]);
        let src = Word::new("cold").unwrap();
        let dst = Word::new("warm").unwrap();

        let reference = find_shortest_path(&src, &dst, &dictionary).unwrap();
        for threads in 1..=6 {
            let ladder = WordLadder::new(
                LadderConfig::default().with_parallelism(NonZeroUsize::new(threads).unwrap()),
            );
            assert_eq!(
                ladder.find_shortest_path(&src, &dst, &dictionary).unwrap(),
                reference
            );
        }
    }

    #[test]
    fn same_word_with_empty_dictionary() {
        let word = Word::new("smart").unwrap();
        let path = find_shortest_path(&word, &word, &[]).unwrap().unwrap();
        assert_eq!(path.words(), &[word.clone()]);
    }

    #[test]
    fn empty_dictionary_not_found() {
        let src = Word::new("smart").unwrap();
        let dst = Word::new("start").unwrap();
        assert_eq!(find_shortest_path(&src, &dst, &[]).unwrap(), None);
    }

    #[test]
    fn unreachable_not_found() {
        let dictionary = words_of(&["smart", "start", "seven"]);
        let src = Word::new("smart").unwrap();
        let dst = Word::new("seven").unwrap();
        assert_eq!(find_shortest_path(&src, &dst, &dictionary).unwrap(), None);
    }

    #[test]
    fn endpoint_length_mismatch() {
        let src = Word::new("smart").unwrap();
        let dst = Word::new("cat").unwrap();

        let result = find_shortest_path(&src, &dst, &chain_dictionary());
        assert!(matches!(
            result,
            Err(LadderError::Validation(
                ValidationError::EndpointLengthMismatch {
                    src_len: 5,
                    dst_len: 3,
                    ..
                }
            ))
        ));
    }

    #[test]
    fn dictionary_length_mismatch() {
        let mut dictionary = chain_dictionary();
        dictionary.push(Word::new("cats").unwrap());
        let src = Word::new("smart").unwrap();
        let dst = Word::new("brain").unwrap();

        let result = find_shortest_path(&src, &dst, &dictionary);
        assert!(matches!(
            result,
            Err(LadderError::Validation(
                ValidationError::DictionaryLengthMismatch { entry: 11, .. }
            ))
        ));
    }

    #[test]
    fn dictionary_length_mismatch_with_same_endpoints() {
        let mut dictionary = chain_dictionary();
        dictionary.push(Word::new("cats").unwrap());
        let word = Word::new("smart").unwrap();

        assert!(matches!(
            find_shortest_path(&word, &word, &dictionary),
            Err(LadderError::Validation(
                ValidationError::DictionaryLengthMismatch { entry: 11, .. }
            ))
        ));
    }

    #[test]
    fn destination_outside_dictionary_not_found() {
        let dictionary = words_of(&["start", "stark"]);
        let src = Word::new("smart").unwrap();
        let dst = Word::new("stack").unwrap();
        assert_eq!(find_shortest_path(&src, &dst, &dictionary).unwrap(), None);
    }

    #[test]
    fn dictionary_shorter_than_endpoints() {
        // Uniform dictionary, but not the endpoints' length
        let dictionary = words_of(&["cold", "cord"]);
        let src = Word::new("smart").unwrap();
        let dst = Word::new("start").unwrap();

        assert!(matches!(
            find_shortest_path(&src, &dst, &dictionary),
            Err(LadderError::Validation(_))
        ));
    }

    #[test]
    fn build_timeout_surfaces_as_construction_error() {
        let dictionary: Vec<Word> = (0..100_000_usize)
            .map(|n| {
                let text: String = (0..5)
                    .rev()
                    .map(|p| char::from(b'a' + (n / 26_usize.pow(p) % 26) as u8))
                    .collect();
                Word::new(text).unwrap()
            })
            .collect();
        let src = dictionary[0].clone();
        let dst = dictionary[dictionary.len() - 1].clone();

        let ladder = WordLadder::new(LadderConfig::new(NonZeroUsize::MIN, Duration::ZERO));
        let result = ladder.find_shortest_path(&src, &dst, &dictionary);
        assert!(matches!(
            result,
            Err(LadderError::Construction(ConstructionError::Timeout(_)))
        ));
    }
}
