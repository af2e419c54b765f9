//! Show the most probable words of a topic.

use anyhow::{bail, Result};
use colored::Colorize;
use topicmatch::prelude::*;

use super::load_snapshot;
use crate::config::Config;

pub fn run(snapshot_path: &str, topic: usize, limit: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let snapshot = load_snapshot(snapshot_path)?;

    if topic >= snapshot.num_topics() {
        bail!(
            "Topic {} does not exist; the model has {} topics.",
            topic,
            snapshot.num_topics().to_string().cyan()
        );
    }

    let limit = limit.unwrap_or(config.charts.words_in_chart);
    let table = topic_words(&snapshot, &snapshot, limit)?;
    let words = words_for_topic(&table, TopicId(topic), limit);

    println!("{} Words in {}:", "→".blue(), format!("Topic {}", topic).cyan().bold());
    println!();

    for (i, word) in words.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            capitalize(&word.word).white().bold(),
            format!("({:.2}%)", word.value * 100.0).dimmed()
        );
    }

    println!();
    println!("{} {} words", "✓".green(), words.len().to_string().cyan());

    Ok(())
}
