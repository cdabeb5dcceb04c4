//! Ladder search command
//!
//! Finds a shortest ladder between two words and reports how it went.

use crate::core::{Path, Word};
use crate::ladder::WordLadder;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Configuration for a single ladder search
pub struct FindConfig {
    pub src: String,
    pub dst: String,
}

impl FindConfig {
    #[must_use]
    pub const fn new(src: String, dst: String) -> Self {
        Self { src, dst }
    }
}

/// Result of a ladder search
pub struct FindResult {
    pub src: String,
    pub dst: String,
    pub path: Option<Path>,
    pub dictionary_size: usize,
    pub duration: Duration,
}

impl FindResult {
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Search for a ladder between the configured words
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not a valid lowercase word
/// - The words and the dictionary do not share one length
/// - The index could not be built in time
pub fn find_ladder(
    config: FindConfig,
    ladder: &WordLadder,
    dictionary: &[Word],
) -> Result<FindResult> {
    let src = Word::new(config.src.as_str())
        .with_context(|| format!("Invalid source word '{}'", config.src))?;
    let dst = Word::new(config.dst.as_str())
        .with_context(|| format!("Invalid destination word '{}'", config.dst))?;

    let start = Instant::now();
    let path = ladder
        .find_shortest_path(&src, &dst, dictionary)
        .context("Ladder search failed")?;

    Ok(FindResult {
        src: config.src,
        dst: config.dst,
        path,
        dictionary_size: dictionary.len(),
        duration: start.elapsed(),
    })
}
