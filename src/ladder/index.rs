//! Wildcard adjacency index
//!
//! For each letter position the index maps a wildcard key (the word with that
//! position erased) to the dictionary words sharing it. Two words sharing a
//! bucket differ at most at that bucket's position, so neighbor enumeration
//! never compares word pairs.
//!
//! The index is built in parallel: the dictionary is split into contiguous
//! chunks, one per worker, and every worker appends into shared per-position
//! maps. Once all workers report back the maps are frozen into plain hash maps.

use super::config::LadderConfig;
use super::error::{ConstructionError, LadderError, ValidationError};
use crate::core::{WildcardKey, Word};
use dashmap::DashMap;
use rayon::ThreadPoolBuilder;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-position bucket maps shared by the index workers
type SharedBuckets = Vec<DashMap<WildcardKey, Vec<usize>, FxBuildHasher>>;

/// Immutable adjacency index over a dictionary
///
/// Buckets hold dictionary entry numbers and are sorted, so iterating a bucket
/// yields words in dictionary order regardless of how workers interleaved.
#[derive(Debug)]
pub struct WordIndex {
    words: Arc<[Word]>,
    word_len: usize,
    positions: Vec<FxHashMap<WildcardKey, Box<[usize]>>>,
}

impl WordIndex {
    fn empty() -> Self {
        Self {
            words: Arc::from(Vec::new()),
            word_len: 0,
            positions: Vec::new(),
        }
    }

    /// The indexed dictionary, in its original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of dictionary entries (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every indexed word; zero for an empty index
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// True if `word` is one of the indexed dictionary entries
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        word.len() == self.word_len && self.bucket(0, &word.wildcard(0)).any(|w| w == word)
    }

    /// Words whose wildcard key at `position` equals `key`
    ///
    /// Yields nothing if the key was never seen or `position` is out of range.
    pub fn bucket<'a>(
        &'a self,
        position: usize,
        key: &WildcardKey,
    ) -> impl Iterator<Item = &'a Word> + use<'a> {
        let entries: &'a [usize] = self
            .positions
            .get(position)
            .and_then(|buckets| buckets.get(key))
            .map(|entries| &entries[..])
            .unwrap_or(&[]);

        entries.iter().map(move |&entry| &self.words[entry])
    }

    /// All wildcard keys recorded for `position`
    pub fn keys(&self, position: usize) -> impl Iterator<Item = &WildcardKey> {
        self.positions
            .get(position)
            .into_iter()
            .flat_map(FxHashMap::keys)
    }

    /// Number of distinct buckets at `position`
    #[must_use]
    pub fn bucket_count(&self, position: usize) -> usize {
        self.positions.get(position).map_or(0, FxHashMap::len)
    }
}

/// Builds a `WordIndex` on a worker pool scoped to each build call
#[derive(Debug, Clone, Copy)]
pub struct Indexer {
    parallelism: NonZeroUsize,
    timeout: Duration,
}

impl Indexer {
    #[must_use]
    pub const fn new(parallelism: NonZeroUsize, timeout: Duration) -> Self {
        Self {
            parallelism,
            timeout,
        }
    }

    #[must_use]
    pub const fn from_config(config: &LadderConfig) -> Self {
        Self::new(config.parallelism, config.build_timeout)
    }

    /// Index `dictionary`, blocking until every worker has finished
    ///
    /// # Errors
    ///
    /// Returns `LadderError::Validation` if the dictionary mixes word lengths,
    /// and `LadderError::Construction` if the worker pool cannot start, a
    /// worker dies, or the workers do not finish within the timeout. No
    /// partial index is ever returned.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use std::time::Duration;
    /// use word_ladder::core::Word;
    /// use word_ladder::ladder::Indexer;
    ///
    /// let words: Vec<Word> = ["smart", "start", "seven"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let indexer = Indexer::new(NonZeroUsize::new(2).unwrap(), Duration::from_secs(5));
    /// let index = indexer.build(words).unwrap();
    ///
    /// let key = Word::new("smart").unwrap().wildcard(1);
    /// assert_eq!(index.bucket(1, &key).count(), 2);
    /// ```
    pub fn build(&self, dictionary: impl Into<Arc<[Word]>>) -> Result<WordIndex, LadderError> {
        let words: Arc<[Word]> = dictionary.into();
        let word_len = words.first().map_or(0, Word::len);
        check_dictionary_lengths(&words, word_len)?;
        Ok(self.build_checked(words, word_len)?)
    }

    /// Index a dictionary whose entries are already known to have `word_len` letters
    pub(crate) fn build_checked(
        &self,
        dictionary: impl Into<Arc<[Word]>>,
        word_len: usize,
    ) -> Result<WordIndex, ConstructionError> {
        let words: Arc<[Word]> = dictionary.into();
        if words.is_empty() {
            return Ok(WordIndex::empty());
        }

        let start = Instant::now();
        let buckets = self.fill_buckets(&words, word_len)?;
        let index = freeze(words, word_len, buckets);

        log::debug!(
            "indexed {} words into {} buckets with {} workers in {:?}",
            index.len(),
            (0..word_len).map(|p| index.bucket_count(p)).sum::<usize>(),
            self.parallelism,
            start.elapsed()
        );

        Ok(index)
    }

    /// Run one worker per chunk and wait for all of them under a single deadline
    fn fill_buckets(
        &self,
        words: &Arc<[Word]>,
        word_len: usize,
    ) -> Result<SharedBuckets, ConstructionError> {
        let buckets: Arc<SharedBuckets> = Arc::new(
            (0..word_len)
                .map(|_| DashMap::with_hasher(FxBuildHasher::default()))
                .collect(),
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.parallelism.get())
            .thread_name(|i| format!("ladder-index-{i}"))
            .panic_handler(|_| log::error!("index worker panicked"))
            .build()?;

        let chunk_size = words.len().div_ceil(self.parallelism.get());
        let (done_tx, done_rx) = mpsc::channel();
        let mut pending = 0;

        for chunk_start in (0..words.len()).step_by(chunk_size) {
            let range = chunk_start..(chunk_start + chunk_size).min(words.len());
            let words = Arc::clone(words);
            let buckets = Arc::clone(&buckets);
            let done_tx = done_tx.clone();

            pool.spawn(move || {
                index_chunk(&words, range, &buckets);
                // Release our handle before reporting so the caller can unwrap the Arc
                drop(buckets);
                // The receiver is only gone if the caller already gave up
                let _ = done_tx.send(chunk_start);
            });
            pending += 1;
        }
        drop(done_tx);

        let deadline = Instant::now().checked_add(self.timeout);
        for _ in 0..pending {
            let received = match deadline {
                Some(deadline) => {
                    done_rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
                }
                None => done_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(chunk_start) => log::trace!("index chunk at {chunk_start} finished"),
                Err(RecvTimeoutError::Timeout) => {
                    return Err(ConstructionError::Timeout(self.timeout));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(ConstructionError::WorkerFailed);
                }
            }
        }

        Arc::try_unwrap(buckets).map_err(|_| ConstructionError::WorkerFailed)
    }
}

/// Reject a dictionary entry whose length differs from `expected`
pub(crate) fn check_dictionary_lengths(
    words: &[Word],
    expected: usize,
) -> Result<(), ValidationError> {
    match words.iter().enumerate().find(|(_, w)| w.len() != expected) {
        Some((entry, word)) => Err(ValidationError::DictionaryLengthMismatch {
            word: word.text().to_string(),
            entry,
            expected,
            found: word.len(),
        }),
        None => Ok(()),
    }
}

fn index_chunk(words: &[Word], range: Range<usize>, buckets: &SharedBuckets) {
    for entry in range {
        let word = &words[entry];
        for (position, bucket_map) in buckets.iter().enumerate() {
            bucket_map
                .entry(word.wildcard(position))
                .or_default()
                .push(entry);
        }
    }
}

fn freeze(words: Arc<[Word]>, word_len: usize, buckets: SharedBuckets) -> WordIndex {
    let positions: Vec<FxHashMap<WildcardKey, Box<[usize]>>> = buckets
        .into_iter()
        .map(|bucket_map| {
            bucket_map
                .into_iter()
                .map(|(key, mut entries)| {
                    entries.sort_unstable();
                    (key, entries.into_boxed_slice())
                })
                .collect()
        })
        .collect();

    WordIndex {
        words,
        word_len,
        positions,
    }
}
