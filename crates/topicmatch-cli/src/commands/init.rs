//! Initialize a topicmatch project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{project_config_path, Config};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing topicmatch project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = project_config_path(&base_path);
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
        println!(
            "  {} Roster has {} supervisors; keep it in the model's order",
            "•".yellow(),
            config.roster.supervisors.len().to_string().cyan()
        );
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} topicmatch project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} topicmatch topics <snapshot.json>", "1.".blue());
    println!("  {} topicmatch recommend <snapshot.json>", "2.".blue());
    println!("  {} topicmatch render <snapshot.json>", "3.".blue());

    Ok(())
}
