//! Neighbor listing command
//!
//! Lists the dictionary words one substitution away from a word.

use crate::core::Word;
use crate::ladder::{Indexer, LadderConfig, adjacent};
use anyhow::{Context, Result, ensure};
use rustc_hash::FxHashSet;

/// A neighbor and the position where it differs
pub struct Neighbor {
    pub word: String,
    pub position: usize,
}

/// Result of listing a word's neighbors
pub struct NeighborReport {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<Neighbor>,
}

/// Collect the neighbors of `word`, ordered by changed position
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word's length differs from the dictionary's
/// - The index could not be built
pub fn list_neighbors(
    word: &str,
    config: &LadderConfig,
    dictionary: &[Word],
) -> Result<NeighborReport> {
    let word_obj = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;

    if let Some(first) = dictionary.first() {
        ensure!(
            first.len() == word_obj.len(),
            "'{word}' has {} letters but the dictionary holds {}-letter words",
            word_obj.len(),
            first.len()
        );
    }

    let index = Indexer::from_config(config)
        .build(dictionary)
        .context("Failed to index dictionary")?;

    // Repeated dictionary entries would otherwise be listed twice
    let mut seen = FxHashSet::default();
    let neighbors = adjacent(&index, &word_obj)
        .filter(|&neighbor| seen.insert(neighbor))
        .filter_map(|neighbor| {
            word_obj.changed_position(neighbor).map(|position| Neighbor {
                word: neighbor.text().to_string(),
                position,
            })
        })
        .collect();

    Ok(NeighborReport {
        word: word.to_string(),
        in_dictionary: index.contains(&word_obj),
        neighbors,
    })
}
