//! Word ladder search
//!
//! Builds a wildcard index over the dictionary in parallel, then runs a
//! breadth-first search over the implicit one-substitution graph.

mod config;
mod engine;
pub mod error;
mod index;
mod neighbors;
pub mod search;

pub use config::{DEFAULT_BUILD_TIMEOUT, LadderConfig};
pub use engine::{WordLadder, find_shortest_path};
pub use error::{ConstructionError, LadderError, ValidationError};
pub use index::{Indexer, WordIndex};
pub use neighbors::adjacent;
pub use search::{PathFinder, PredecessorMap, Visit};
