//! Show a document's leading topics.

use anyhow::Result;
use colored::Colorize;
use topicmatch::prelude::*;

use super::{load_snapshot, resolve_document};
use crate::config::Config;

pub fn run(snapshot_path: &str, document: Option<String>, top: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let snapshot = load_snapshot(snapshot_path)?;
    let document = resolve_document(&snapshot, document)?;

    let distribution = snapshot.document_topics(&document)?;
    let top = top_topics(&distribution, top.unwrap_or(config.analysis.top_topics));

    if top.is_empty() {
        println!("{} No topics for: {}", "•".yellow(), document.cyan());
        return Ok(());
    }

    println!("{} Top topics for {}:", "→".blue(), document.cyan().bold());
    println!();

    for (i, score) in top.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            format!("Topic {}", score.topic).white().bold(),
            format!("({:.1}%)", score.weight * 100.0).dimmed()
        );
    }

    println!();
    println!(
        "{} {} of {} topics",
        "✓".green(),
        top.len().to_string().cyan(),
        snapshot.num_topics().to_string().cyan()
    );

    Ok(())
}
