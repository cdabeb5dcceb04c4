//! Breadth-first ladder search
//!
//! All edges have unit weight, so the first time BFS reaches the destination
//! it has done so along a shortest ladder and the search can stop right there.

use super::index::WordIndex;
use super::neighbors::adjacent;
use crate::core::{Path, Word};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// How a visited word was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<'a> {
    /// The source word
    Root,
    /// Discovered from this word one layer earlier
    From(&'a Word),
}

/// BFS predecessor links, also serving as the visited set
///
/// A word that is absent has not been visited yet.
#[derive(Debug)]
pub struct PredecessorMap<'a> {
    visits: FxHashMap<&'a Word, Visit<'a>>,
}

impl<'a> PredecessorMap<'a> {
    /// Start a map whose only entry is `root`
    #[must_use]
    pub fn new(root: &'a Word) -> Self {
        let mut visits = FxHashMap::default();
        visits.insert(root, Visit::Root);
        Self { visits }
    }

    #[must_use]
    pub fn visit(&self, word: &Word) -> Option<Visit<'a>> {
        self.visits.get(word).copied()
    }

    /// Record that `word` was reached from `from`
    ///
    /// Returns false, leaving the map untouched, if `word` was already visited.
    pub fn record(&mut self, word: &'a Word, from: &'a Word) -> bool {
        if self.visits.contains_key(word) {
            return false;
        }
        self.visits.insert(word, Visit::From(from));
        true
    }

    /// Number of visited words, root included
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Never true: the root is always present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Follow predecessor links from `dst` back to the root
    ///
    /// Returns `None` if `dst` was never visited.
    #[must_use]
    pub fn reconstruct(&self, dst: &'a Word) -> Option<Path> {
        let mut backwards = vec![dst.clone()];
        let mut current = dst;

        loop {
            match self.visits.get(current)? {
                Visit::Root => break,
                Visit::From(previous) => {
                    backwards.push((*previous).clone());
                    current = *previous;
                }
            }
        }

        backwards.reverse();
        Some(Path::new(backwards))
    }
}

/// Single-threaded BFS over the implicit one-substitution graph of an index
pub struct PathFinder<'a> {
    index: &'a WordIndex,
}

impl<'a> PathFinder<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }

    /// Shortest ladder from `src` to `dst`, or `None` if `dst` is unreachable
    ///
    /// `src` may lie outside the dictionary. Every other word on the ladder,
    /// `dst` included, is reached through the index's buckets, so a `dst`
    /// missing from the dictionary is never found.
    #[must_use]
    pub fn search(&self, src: &'a Word, dst: &'a Word) -> Option<Path> {
        if src == dst {
            return Some(Path::new(vec![src.clone()]));
        }

        let start = Instant::now();
        let mut predecessors = PredecessorMap::new(src);
        let mut frontier: Vec<&'a Word> = vec![src];
        let mut depth = 0;

        while !frontier.is_empty() {
            depth += 1;
            let mut next = Vec::new();

            for &vertex in &frontier {
                for neighbor in adjacent(self.index, vertex) {
                    if !predecessors.record(neighbor, vertex) {
                        continue;
                    }
                    if neighbor == dst {
                        log::debug!(
                            "reached '{dst}' at depth {depth} after visiting {} words in {:?}",
                            predecessors.len(),
                            start.elapsed()
                        );
                        return predecessors.reconstruct(neighbor);
                    }
                    next.push(neighbor);
                }
            }

            log::trace!("layer {depth}: {} words", next.len());
            frontier = next;
        }

        log::debug!(
            "exhausted {} reachable words from '{src}' in {:?}",
            predecessors.len(),
            start.elapsed()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::index::Indexer;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::num::NonZeroUsize;
    use std::time::Duration;

    fn words_of(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn build(words: Vec<Word>) -> WordIndex {
        Indexer::new(NonZeroUsize::new(4).unwrap(), Duration::from_secs(5))
            .build(words)
            .unwrap()
    }

    /// Pairwise-comparison BFS distance, independent of the index
    ///
    /// Only dictionary words are ever stepped onto, `dst` included.
    fn brute_force_distance(src: &Word, dst: &Word, dictionary: &[Word]) -> Option<usize> {
        if src == dst {
            return Some(0);
        }
        let mut distance: HashMap<&Word, usize> = HashMap::from([(src, 0)]);
        let mut queue = VecDeque::from([src]);

        while let Some(current) = queue.pop_front() {
            let d = distance[current];
            for candidate in dictionary {
                if candidate.is_adjacent_to(current) && !distance.contains_key(candidate) {
                    if candidate == dst {
                        return Some(d + 1);
                    }
                    distance.insert(candidate, d + 1);
                    queue.push_back(candidate);
                }
            }
        }
        None
    }

    fn random_word(rng: &mut StdRng, len: usize) -> Word {
        // Small alphabet keeps the graph dense enough to have long ladders
        let text: String = (0..len)
            .map(|_| char::from(b'a' + rng.random_range(0..3u8)))
            .collect();
        Word::new(text).unwrap()
    }

    fn random_dictionary(rng: &mut StdRng, size: usize, len: usize) -> Vec<Word> {
        (0..size).map(|_| random_word(rng, len)).collect()
    }

    /// A random word, drawn from outside `dictionary` when `outside` is set
    fn random_endpoint(rng: &mut StdRng, dictionary: &[Word], outside: bool) -> Word {
        if !outside {
            return dictionary[rng.random_range(0..dictionary.len())].clone();
        }
        loop {
            let word = random_word(rng, dictionary[0].len());
            if !dictionary.contains(&word) {
                return word;
            }
        }
    }

    #[test]
    fn reconstruct_walks_back_to_root() {
        let words = words_of(&["smart", "start", "stark"]);
        let mut predecessors = PredecessorMap::new(&words[0]);
        assert!(predecessors.record(&words[1], &words[0]));
        assert!(predecessors.record(&words[2], &words[1]));

        let path = predecessors.reconstruct(&words[2]).unwrap();
        assert_eq!(path.words(), &words[..]);
        assert_eq!(predecessors.visit(&words[0]), Some(Visit::Root));
        assert_eq!(predecessors.visit(&words[2]), Some(Visit::From(&words[1])));
    }

    #[test]
    fn reconstruct_root_only() {
        let root = Word::new("smart").unwrap();
        let predecessors = PredecessorMap::new(&root);
        let path = predecessors.reconstruct(&root).unwrap();
        assert_eq!(path.words(), &[root.clone()]);
    }

    #[test]
    fn reconstruct_unvisited_is_none() {
        let words = words_of(&["smart", "brain"]);
        let predecessors = PredecessorMap::new(&words[0]);
        assert!(predecessors.reconstruct(&words[1]).is_none());
    }

    #[test]
    fn record_keeps_first_predecessor() {
        let words = words_of(&["cold", "cord", "bold", "bord"]);
        let mut predecessors = PredecessorMap::new(&words[0]);
        assert!(predecessors.record(&words[1], &words[0]));
        assert!(!predecessors.record(&words[1], &words[3]));
        assert!(!predecessors.record(&words[0], &words[2]));
        assert_eq!(predecessors.visit(&words[1]), Some(Visit::From(&words[0])));
        assert_eq!(predecessors.len(), 2);
    }

    #[test]
    fn finds_the_chain() {
        let dictionary = words_of(&[
            "smart", "start", "stark", "stack", "slack", "black", "blank", "bland", "brand",
            "braid", "brain",
        ]);
        let index = build(dictionary.clone());
        let src = Word::new("smart").unwrap();
        let dst = Word::new("brain").unwrap();

        let path = PathFinder::new(&index).search(&src, &dst).unwrap();

        assert_eq!(path.source(), Some(&src));
        assert_eq!(path.destination(), Some(&dst));
        assert!(path.is_ladder());
        assert_eq!(
            Some(path.steps()),
            brute_force_distance(&src, &dst, &dictionary)
        );
        assert_eq!(path.words(), &dictionary[..]);
    }

    #[test]
    fn prefers_shortcut() {
        let dictionary = words_of(&["cold", "cord", "card", "ward", "warm", "wold", "word"]);
        let index = build(dictionary.clone());
        let src = Word::new("cold").unwrap();
        let dst = Word::new("warm").unwrap();

        let path = PathFinder::new(&index).search(&src, &dst).unwrap();
        assert_eq!(path.steps(), 4);
        assert_eq!(
            Some(path.steps()),
            brute_force_distance(&src, &dst, &dictionary)
        );
    }

    #[test]
    fn same_source_and_destination() {
        let index = build(Vec::new());
        let word = Word::new("smart").unwrap();
        let path = PathFinder::new(&index).search(&word, &word).unwrap();
        assert_eq!(path.words(), &[word.clone()]);
    }

    #[test]
    fn unreachable_is_none_every_time() {
        let index = build(words_of(&["smart", "start", "seven", "sever"]));
        let src = Word::new("smart").unwrap();
        let dst = Word::new("seven").unwrap();
        let finder = PathFinder::new(&index);

        for _ in 0..3 {
            assert!(finder.search(&src, &dst).is_none());
        }
    }

    #[test]
    fn source_outside_dictionary() {
        let index = build(words_of(&["start", "stark", "stack"]));
        let src = Word::new("smart").unwrap();
        let dst = Word::new("stack").unwrap();

        let path = PathFinder::new(&index).search(&src, &dst).unwrap();
        let texts: Vec<&str> = path.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["smart", "start", "stark", "stack"]);
    }

    #[test]
    fn destination_outside_dictionary_not_found() {
        let index = build(words_of(&["start", "stark"]));
        let src = Word::new("smart").unwrap();
        let dst = Word::new("stack").unwrap();
        assert!(PathFinder::new(&index).search(&src, &dst).is_none());
    }

    #[test]
    fn destination_outside_dictionary_one_step_from_source() {
        let index = build(words_of(&["brain"]));
        let src = Word::new("smart").unwrap();
        let dst = Word::new("start").unwrap();
        assert!(PathFinder::new(&index).search(&src, &dst).is_none());
    }

    #[test]
    fn empty_dictionary_not_found() {
        let index = build(Vec::new());
        let src = Word::new("smart").unwrap();
        let dst = Word::new("start").unwrap();
        assert!(PathFinder::new(&index).search(&src, &dst).is_none());
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x1add3e);

        for round in 0..40 {
            let dictionary = random_dictionary(&mut rng, 30, 4);
            let index = build(dictionary.clone());
            let finder = PathFinder::new(&index);
            // Rounds 1, 5, 9.. start outside the dictionary, rounds 2, 6, 10.. end there
            let src = random_endpoint(&mut rng, &dictionary, round % 4 == 1);
            let dst = random_endpoint(&mut rng, &dictionary, round % 4 == 2);

            let expected = brute_force_distance(&src, &dst, &dictionary);
            let found = finder.search(&src, &dst);
            assert_eq!(
                found.as_ref().map(Path::steps),
                expected,
                "round {round}: {src} -> {dst}"
            );

            if round % 4 == 2 {
                assert!(found.is_none(), "round {round}: {src} -> {dst}");
            }
            if let Some(path) = found {
                assert!(path.is_ladder(), "round {round}: {path}");
                let members: HashSet<&Word> = dictionary.iter().collect();
                assert!(
                    path.interior()
                        .iter()
                        .chain(path.destination())
                        .all(|w| members.contains(w))
                );
            }
        }
    }
}
