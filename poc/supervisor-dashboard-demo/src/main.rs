//! Dashboard Demo: from model outputs to a supervisor dashboard
//!
//! Protocol:
//! 1. Load an embedded model snapshot (8 topics, 12 supervisors, 1 proposal)
//! 2. Find the proposal's three leading topics
//! 3. Rank supervisors per topic under the default policy
//! 4. Output: console summary + HTML report with word clouds and dashboard

use topicmatch_core::prelude::*;
use topicmatch_viz::{ArtifactFormat, Report, ReportStyle};

const SUPERVISORS: [&str; 12] = [
    "Helmut Anheier", "Joanna Bryson", "Basak Cali", "Luciana Cingolani",
    "Cathryn Costello", "Mark Dawson", "Christian Flachsland", "Anita Gohdes",
    "Lukas Graf", "Mark Hallerberg", "Gerhard Hammerschmid", "Anke Hassel",
];

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  topicmatch: Supervisor Dashboard Demo               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // --- Load snapshot ---
    let snapshot = ModelSnapshot::from_json(include_str!("../data/snapshot.json"))
        .expect("Failed to parse snapshot.json");
    let roster = Roster::new(SUPERVISORS);
    let document = snapshot
        .default_document()
        .expect("snapshot.json has no documents")
        .to_string();
    println!("Model: {} topics, {} terms, {} supervisors",
        snapshot.num_topics(), Vocabulary::len(&snapshot), roster.len());
    println!();

    // --- Analyse ---
    println!("── Phase 1: Leading topics ────────────────────────────");
    let analysis = analyze(&snapshot, &roster, &document, &AnalysisSettings::default())
        .expect("analysis failed");
    for profile in &analysis.profiles {
        let words: Vec<String> = profile
            .chart_words(5)
            .iter()
            .map(|w| capitalize(&w.word))
            .collect();
        println!("  Topic {} ({:.1}%): {}",
            profile.score.topic, profile.score.weight * 100.0, words.join(", "));
    }
    println!();

    println!("── Phase 2: Supervisor ranking ────────────────────────");
    for list in &analysis.recommendations {
        let names: Vec<String> = list
            .rows
            .iter()
            .rev()
            .map(|r| format!("{} {:.1}%", r.name, r.similarity_pct))
            .collect();
        if names.is_empty() {
            println!("  Topic {}: no supervisor qualifies", list.topic);
        } else {
            println!("  Topic {}: {}", list.topic, names.join(" | "));
        }
    }
    println!();

    // --- Render ---
    println!("── Phase 3: Report ────────────────────────────────────");
    let report = Report::build(&analysis, &ReportStyle::default());
    let written = report
        .write_to(
            std::path::Path::new("poc/supervisor-dashboard-demo/output"),
            &[ArtifactFormat::Html, ArtifactFormat::Json, ArtifactFormat::Svg],
        )
        .expect("Failed to write report");
    for path in &written {
        println!("  {}", path.display());
    }

    let json = serde_json::to_string_pretty(&analysis).expect("analysis serializes");
    std::fs::write("poc/supervisor-dashboard-demo/output/analysis.json", json).ok();
    println!("  poc/supervisor-dashboard-demo/output/analysis.json");
}
