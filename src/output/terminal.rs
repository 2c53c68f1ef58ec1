// Colored terminal output for language listings and topic results.
//
// This module handles all terminal-specific formatting: colors and tables.
// main.rs and the interactive menu delegate here.

use colored::Colorize;

use crate::graph::PairScore;
use crate::languages::CATALOG;
use crate::pipeline::batch::BatchSummary;
use crate::pipeline::topic::TopicReport;

/// Display every supported language in three columns.
pub fn display_languages() {
    println!("\n{}", "=".repeat(60));
    println!("{}", "AVAILABLE LANGUAGES:".bold());
    println!("{}", "=".repeat(60));

    for row in CATALOG.chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|l| format!("{:<20}", l.display_name()))
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
    println!("{}", "=".repeat(60));
}

/// Display the pair scores of a finished topic.
pub fn display_topic_report(report: &TopicReport) {
    println!(
        "\n{}",
        format!("=== Similarity for '{}' ({} words) ===", report.topic, report.source_word_count)
            .bold()
    );
    println!();

    println!(
        "  {:<6} {:<6} {:>9}",
        "Lang".dimmed(),
        "Lang".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(23).dimmed());

    for pair in &report.pairs {
        println!(
            "  {:<6} {:<6} {:>9}",
            pair.a,
            pair.b,
            colorize_score(pair.score),
        );
    }

    if let Some(best) = report
        .pairs
        .iter()
        .filter_map(|p| p.score.0.map(|s| (p, s)))
        .max_by(|x, y| x.1.total_cmp(&y.1))
    {
        println!(
            "\n  Closest pair: {} / {} ({})",
            best.0.a.bold(),
            best.0.b.bold(),
            best.0.label
        );
    }
    println!("  {}", format!("Aggregation: {}", report.aggregator).dimmed());
}

/// Display the outcome of a directory batch.
pub fn display_batch_summary(summary: &BatchSummary) {
    let line = format!(
        "Successfully processed {}/{} files!",
        summary.succeeded, summary.total
    );
    if summary.succeeded == summary.total {
        println!("\n{}", line.green().bold());
    } else {
        println!("\n{}", line.yellow().bold());
        for topic in &summary.failed {
            println!("  {} {}", "x".red(), topic);
        }
    }
}

/// Colorize a pair score: high overlap green, moderate yellow, low red.
fn colorize_score(score: PairScore) -> colored::ColoredString {
    let label = score.to_string();
    match score.0 {
        Some(s) if s >= 0.6 => label.green(),
        Some(s) if s >= 0.3 => label.yellow(),
        Some(_) => label.red(),
        None => label.dimmed(),
    }
}
