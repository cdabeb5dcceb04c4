//! Word Ladder - CLI
//!
//! Finds shortest word ladders through a dictionary.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use std::time::Duration;
use word_ladder::{
    commands::{FindConfig, find_ladder, list_neighbors, random_pairs, run_benchmark},
    core::Word,
    ladder::{LadderConfig, WordLadder},
    logging,
    output::{print_benchmark_result, print_find_result, print_neighbor_report},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders via parallel wildcard indexing and breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Index worker threads (default: available parallelism)
    #[arg(short = 'j', long, global = true)]
    threads: Option<NonZeroUsize>,

    /// Give up on index construction after this many milliseconds
    #[arg(long, global = true, default_value_t = 5000)]
    timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder between two words
    Find {
        /// Starting word
        src: String,

        /// Target word
        dst: String,
    },

    /// List dictionary words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Search ladders between random dictionary pairs
    Benchmark {
        /// Number of random pairs to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for pair selection (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist '{path}'")),
    }
}

fn ladder_config(cli: &Cli) -> LadderConfig {
    let config = LadderConfig::default().with_build_timeout(Duration::from_millis(cli.timeout_ms));
    match cli.threads {
        Some(threads) => config.with_parallelism(threads),
        None => config,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose).context("Failed to start logger")?;

    let dictionary = load_wordlist(&cli.wordlist)?;
    log::info!("loaded {} words from {}", dictionary.len(), cli.wordlist);

    let config = ladder_config(&cli);

    match cli.command {
        Commands::Find { src, dst } => {
            run_find_command(src, dst, cli.verbose > 0, &config, &dictionary)
        }
        Commands::Neighbors { word } => run_neighbors_command(&word, &config, &dictionary),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &config, &dictionary)
        }
    }
}

fn run_find_command(
    src: String,
    dst: String,
    verbose: bool,
    config: &LadderConfig,
    dictionary: &[Word],
) -> Result<()> {
    let ladder = WordLadder::new(*config);
    let result = find_ladder(FindConfig::new(src, dst), &ladder, dictionary)?;

    print_find_result(&result, verbose);
    Ok(())
}

fn run_neighbors_command(word: &str, config: &LadderConfig, dictionary: &[Word]) -> Result<()> {
    let report = list_neighbors(word, config, dictionary)?;
    print_neighbor_report(&report);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    config: &LadderConfig,
    dictionary: &[Word],
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Running benchmark on {count} random pairs...");
    let pairs = random_pairs(dictionary, count, &mut rng);

    let ladder = WordLadder::new(*config);
    let result = run_benchmark(&ladder, dictionary, &pairs, true).context("Benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
