//! Display functions for command results

use super::formatters::{change_marker, create_progress_bar, split_at_change};
use crate::commands::{BenchmarkResult, FindResult, NeighborReport};
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.src.to_uppercase().bright_yellow().bold(),
        result.dst.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(path) = &result.path else {
        println!();
        println!(
            "{}",
            format!("❌ No ladder from {} to {}", result.src, result.dst)
                .red()
                .bold()
        );
        print_search_stats(result, verbose);
        return;
    };

    if let Some(source) = path.source() {
        println!("\n   0. {}", source.text().bright_white());
    }
    for (step, pair) in path.words().windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let Some(position) = previous.changed_position(current) else {
            println!("  {:2}. {}", step + 1, current.text());
            continue;
        };

        let (before, changed, after) = split_at_change(current.text(), position);
        println!(
            "  {:2}. {}{}{}",
            step + 1,
            before,
            changed.bright_green().bold(),
            after
        );
        if verbose {
            println!("      {}", change_marker(position, current.len()).bright_black());
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Found a {}-step ladder", path.steps())
            .green()
            .bold()
    );
    print_search_stats(result, verbose);
}

fn print_search_stats(result: &FindResult, verbose: bool) {
    if verbose {
        println!("   Dictionary:  {} words", result.dictionary_size);
        println!("   Time taken:  {:.2}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print a word's neighbor listing
pub fn print_neighbor_report(report: &NeighborReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.in_dictionary {
        println!("\n   {}", "(not in dictionary)".bright_black());
    }

    if report.neighbors.is_empty() {
        println!("\n   No words one letter away.");
        return;
    }

    println!();
    for neighbor in &report.neighbors {
        let (before, changed, after) = split_at_change(&neighbor.word, neighbor.position);
        println!(
            "   {}{}{}  (position {})",
            before,
            changed.bright_green().bold(),
            after,
            neighbor.position + 1
        );
    }
    println!("\n   {} neighbors", report.neighbors.len());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    if let Some((src, dst, steps)) = &result.longest {
        println!("   Longest ladder:   {src} → {dst} ({steps} steps)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&steps, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
