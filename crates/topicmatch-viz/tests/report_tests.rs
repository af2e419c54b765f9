//! Report assembly from a full analysis.

use topicmatch_core::prelude::*;
use topicmatch_viz::{ArtifactFormat, Report, ReportStyle, WordCloud};

fn snapshot() -> ModelSnapshot {
    ModelSnapshot::from_json(
        r#"{
        "vocabulary": ["governance", "climate", "labour", "courts", "markets", "migration"],
        "topic_terms": [
            [0.40, 0.05, 0.05, 0.30, 0.15, 0.05],
            [0.05, 0.60, 0.05, 0.05, 0.20, 0.05],
            [0.05, 0.05, 0.50, 0.05, 0.05, 0.30]
        ],
        "supervisor_topics": [
            [[0, 0.8], [1, 0.2]],
            [[1, 0.9]],
            [[2, 0.6], [0, 0.4]],
            [[1, 0.7], [2, 0.3]]
        ],
        "documents": [
            {"id": "thesis <draft>",
             "topics": [[0, 0.2], [1, 0.5], [2, 0.3]],
             "similarities": [0.15, 0.55, 0.35, 0.65]}
        ]
    }"#,
    )
    .unwrap()
}

fn report() -> Report {
    let roster = Roster::new(["Helmut Anheier", "Joanna Bryson", "Basak Cali", "Mark Dawson"]);
    let analysis = analyze(&snapshot(), &roster, "thesis <draft>", &AnalysisSettings::default())
        .unwrap();
    Report::build(&analysis, &ReportStyle::default())
}

#[test]
fn report_has_a_section_per_top_topic() {
    let report = report();
    assert_eq!(report.sections.len(), 3);
    assert_eq!(report.sections[0].title, "Topic 1");
    assert_eq!(report.topics.data[0].y, vec!["1", "2", "0"]);
    assert_eq!(report.dashboard.data.len(), 3);
}

#[test]
fn dashboard_lists_ranked_supervisors() {
    let report = report();
    // topic 1: Joanna (0.9, 55%) and Mark (0.7, 65%), ascending
    let first = &report.dashboard.data[0];
    assert_eq!(first.y, vec!["Joanna<br>Bryson", "Mark<br>Dawson"]);
    assert!((first.x[1] - 65.0).abs() < 1e-9);
}

#[test]
fn html_escapes_document_title() {
    let html = report().to_html().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("thesis &lt;draft&gt;"));
    assert!(!html.contains("thesis <draft>"));
    assert_eq!(html.matches("Plotly.newPlot").count(), 5);
    assert_eq!(html.matches("<svg").count(), 3);
}

#[test]
fn writes_requested_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let written = report()
        .write_to(&out, &[ArtifactFormat::Html, ArtifactFormat::Json, ArtifactFormat::Svg])
        .unwrap();

    // report.html + topics/words x3/dashboard + three clouds
    assert_eq!(written.len(), 1 + 5 + 3);
    assert!(out.join("report.html").exists());
    assert!(out.join("dashboard.json").exists());
    assert!(out.join("cloud-2.svg").exists());

    let dashboard: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("dashboard.json")).unwrap()).unwrap();
    assert_eq!(dashboard["layout"]["updatemenus"][0]["buttons"][2]["label"], "Topic 0");
}

#[test]
fn cloud_words_never_overlap_and_stay_on_canvas() {
    let cloud = WordCloud::default().with_size(300, 150);
    let words: Vec<(String, f64)> = (0..60)
        .map(|i| (format!("term{}", i), 1.0 / (1.0 + i as f64)))
        .collect();
    let placed = cloud.layout(&words);
    assert!(!placed.is_empty());

    for (i, a) in placed.iter().enumerate() {
        assert!(a.x >= 0.0 && a.y >= 0.0);
        assert!(a.x + a.width <= 300.0 && a.y + a.height <= 150.0);
        assert!(a.font_size >= cloud.min_font_size && a.font_size <= cloud.max_font_size);
        for b in &placed[i + 1..] {
            assert!(!a.overlaps(b), "{} overlaps {}", a.text, b.text);
        }
    }
}

#[test]
fn cloud_layout_is_deterministic() {
    let cloud = WordCloud::default();
    let words = vec![("alpha".to_string(), 0.5), ("beta".to_string(), 0.3), ("gamma".to_string(), 0.2)];
    assert_eq!(cloud.layout(&words), cloud.layout(&words));
}
