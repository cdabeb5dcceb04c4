//! Word Ladder
//!
//! Finds a shortest chain of single-letter substitutions between two words,
//! where every intermediate word comes from a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::ladder::find_shortest_path;
//! use word_ladder::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let src = Word::new("smart").unwrap();
//! let dst = Word::new("brain").unwrap();
//!
//! let path = find_shortest_path(&src, &dst, &dictionary).unwrap();
//! if let Some(path) = path {
//!     println!("{path} ({} steps)", path.steps());
//! }
//! ```

// Core domain types
pub mod core;

// Index construction and breadth-first search
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
