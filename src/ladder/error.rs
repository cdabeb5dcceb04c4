//! Error types for ladder search
//!
//! A missing ladder is not an error: searches return `Ok(None)` for that.

use std::time::Duration;
use thiserror::Error;

/// Malformed input detected before indexing begins
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source '{src}' has {src_len} letters but destination '{dst}' has {dst_len}")]
    EndpointLengthMismatch {
        src: String,
        src_len: usize,
        dst: String,
        dst_len: usize,
    },

    #[error("dictionary word '{word}' (entry {entry}) has {found} letters, expected {expected}")]
    DictionaryLengthMismatch {
        word: String,
        entry: usize,
        expected: usize,
        found: usize,
    },
}

/// The parallel index build did not produce an index
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("failed to start index workers: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("index workers did not finish within {0:?}")]
    Timeout(Duration),

    #[error("an index worker stopped before finishing its chunk")]
    WorkerFailed,
}

/// Any failure of `find_shortest_path`
#[derive(Debug, Error)]
pub enum LadderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
