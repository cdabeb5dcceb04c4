//! Command implementations

pub mod benchmark;
pub mod find;
pub mod neighbors;

pub use benchmark::{BenchmarkResult, random_pairs, run_benchmark};
pub use find::{FindConfig, FindResult, find_ladder};
pub use neighbors::{Neighbor, NeighborReport, list_neighbors};
