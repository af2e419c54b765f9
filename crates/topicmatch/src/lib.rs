//! # topicmatch
//!
//! Topic charts and supervisor recommendations from precomputed topic-model
//! outputs.
//!
//! An upstream application trains the topic model and scores a submitted
//! document against each supervisor's profile. topicmatch takes those
//! outputs, finds the document's leading topics, ranks supervisors per
//! topic, and renders the charts.
//!
//! ## Quick Start
//!
//! ```rust
//! use topicmatch::prelude::*;
//!
//! let snapshot = ModelSnapshot::from_json(r#"{
//!     "vocabulary": ["policy", "climate"],
//!     "topic_terms": [[0.8, 0.2], [0.3, 0.7]],
//!     "supervisor_topics": [[[0, 0.9]], [[1, 0.6]]],
//!     "documents": [{"id": "proposal", "topics": [[1, 0.7], [0, 0.3]], "similarities": [0.4, 0.8]}]
//! }"#).unwrap();
//! let roster = Roster::new(["Ada Lovelace", "Grace Hopper"]);
//!
//! let analysis = analyze(&snapshot, &roster, "proposal", &AnalysisSettings::default()).unwrap();
//! assert_eq!(analysis.recommendations[0].rows[0].name, "Grace Hopper");
//!
//! let report = Report::build(&analysis, &ReportStyle::default());
//! let html = report.to_html().unwrap();
//! assert!(html.contains("Recommended supervisors"));
//! ```
//!
//! ## Architecture
//!
//! - [`topicmatch_core`] - model boundary traits, topic ranking, supervisor ranker, analysis
//! - [`topicmatch_viz`] - Plotly figures, word clouds, HTML report

pub use topicmatch_core;
pub use topicmatch_viz;

pub mod prelude {
    //! Everything needed to analyse a document and render its report.

    pub use topicmatch_core::prelude::*;
    pub use topicmatch_viz::{
        generate_html, parse_formats, recommendation_dashboard, topic_chart, word_chart,
        ArtifactFormat, Figure, PlacedWord, Report, ReportStyle, WordCloud,
    };
}
