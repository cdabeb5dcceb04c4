//! Word lists for ladder search
//!
//! Provides an embedded five-letter dictionary and a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
