//! Render the report artifacts for a document.

use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;
use topicmatch::prelude::*;

use super::{load_snapshot, resolve_document};
use crate::config::Config;

pub fn run(
    snapshot_path: &str,
    document: Option<String>,
    output: Option<String>,
    format: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let formats = parse_formats(format.as_deref().unwrap_or(&config.output.formats))
        .map_err(|e| anyhow!(e))?;
    let output = output.unwrap_or_else(|| config.output.dir.clone());

    println!("{} Loading snapshot...", "→".blue());
    let snapshot = load_snapshot(snapshot_path)?;
    let document = resolve_document(&snapshot, document)?;

    let analysis = analyze(&snapshot, &config.roster(), &document, &config.analysis_settings())?;
    let report = Report::build(&analysis, &config.report_style());
    let written = report.write_to(Path::new(&output), &formats)?;

    println!();
    println!("{} Rendered {}", "✓".green().bold(), document.cyan());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
