//! Rank supervisors for a document's leading topics.

use anyhow::{Context, Result};
use colored::Colorize;
use topicmatch::prelude::*;

use super::{load_snapshot, resolve_document};
use crate::config::Config;

pub fn run(snapshot_path: &str, document: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let snapshot = load_snapshot(snapshot_path)?;
    let document = resolve_document(&snapshot, document)?;

    let analysis = analyze(&snapshot, &config.roster(), &document, &config.analysis_settings())
        .context("Check that [roster] lists one supervisor per model supervisor row")?;

    println!(
        "{} Supervisors for {} (weight > {}, top {}):",
        "→".blue(),
        document.cyan().bold(),
        config.ranking.min_topic_weight,
        config.ranking.top_k
    );

    for (score, list) in analysis.top_topics.iter().zip(&analysis.recommendations) {
        println!();
        println!(
            "  {} {}",
            format!("Topic {}", list.topic).white().bold(),
            format!("({:.1}% of document)", score.weight * 100.0).dimmed()
        );

        if list.rows.is_empty() {
            println!("    {} No supervisor qualifies", "•".yellow());
            continue;
        }

        // Rows ascend for charting; print the best match first.
        for (i, row) in list.rows.iter().rev().enumerate() {
            let rank = format!("{}.", i + 1);
            println!(
                "    {} {} {}",
                rank.blue(),
                row.name.white(),
                format!("({:.1}% similar)", row.similarity_pct).dimmed()
            );
        }
    }

    let total: usize = analysis.recommendations.iter().map(|r| r.rows.len()).sum();
    println!();
    println!(
        "{} {} recommendations across {} topics",
        "✓".green(),
        total.to_string().cyan(),
        analysis.recommendations.len().to_string().cyan()
    );

    Ok(())
}
