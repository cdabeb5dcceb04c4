//! Core domain types for word ladders
//!
//! Pure value types shared by the index, the search and the outer layers.

mod path;
mod word;

pub use path::Path;
pub use word::{WildcardKey, Word, WordError};
