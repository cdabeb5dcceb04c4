//! Benchmark command
//!
//! Runs ladder searches between many word pairs and summarizes them.

use crate::core::Word;
use crate::ladder::{LadderError, WordLadder};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub not_found: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    /// Longest ladder found, as (source, destination, steps)
    pub longest: Option<(String, String, usize)>,
    /// Ladder length (steps) to number of pairs
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Draw `count` random (source, destination) pairs from the dictionary
#[must_use]
pub fn random_pairs<R: Rng + ?Sized>(
    dictionary: &[Word],
    count: usize,
    rng: &mut R,
) -> Vec<(Word, Word)> {
    (0..count)
        .filter_map(|_| {
            let src = dictionary.choose(rng)?;
            let dst = dictionary.choose(rng)?;
            Some((src.clone(), dst.clone()))
        })
        .collect()
}

/// Search a ladder for every pair
///
/// Each search builds its own index, so the timings include index construction.
///
/// # Errors
///
/// Returns the first validation or construction error; a missing ladder is
/// counted, not treated as an error.
pub fn run_benchmark(
    ladder: &WordLadder,
    dictionary: &[Word],
    pairs: &[(Word, Word)],
    show_progress: bool,
) -> Result<BenchmarkResult, LadderError> {
    let pb = if show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut found = 0;
    let mut total_steps = 0;
    let mut longest: Option<(String, String, usize)> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for (idx, (src, dst)) in pairs.iter().enumerate() {
        if let Some(path) = ladder.find_shortest_path(src, dst, dictionary)? {
            let steps = path.steps();
            found += 1;
            total_steps += steps;
            *distribution.entry(steps).or_insert(0) += 1;

            if longest.as_ref().is_none_or(|(_, _, best)| steps > *best) {
                longest = Some((src.text().to_string(), dst.text().to_string(), steps));
            }
        }

        if idx % 10 == 0 && found > 0 {
            pb.set_message(format!("Avg: {:.2} steps", total_steps as f64 / found as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_pairs = pairs.len();

    Ok(BenchmarkResult {
        total_pairs,
        found,
        not_found: total_pairs - found,
        total_steps,
        average_steps: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        longest,
        distribution,
        duration,
        pairs_per_second: if total_pairs > 0 && !duration.is_zero() {
            total_pairs as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}
