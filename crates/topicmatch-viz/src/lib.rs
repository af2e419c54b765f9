//! # topicmatch viz
//!
//! Visual artifacts for an analysed document.
//!
//! Charts are described as Plotly figure JSON ([`figure::Figure`]) so any
//! Plotly front end can draw them; word clouds are laid out here and
//! rendered to SVG. [`report::Report`] bundles everything for one document
//! and writes a standalone HTML page.
//!
//! - **charts** — top topics, words per topic, recommendation dashboard
//! - **wordcloud** — spiral word placement and SVG output
//! - **report** — report assembly and artifact files

pub mod palette;
pub mod figure;
pub mod charts;
pub mod wordcloud;
pub mod html;
pub mod report;

pub use charts::{recommendation_dashboard, topic_chart, word_chart};
pub use figure::Figure;
pub use html::generate_html;
pub use report::{parse_formats, ArtifactFormat, Report, ReportStyle};
pub use wordcloud::{PlacedWord, WordCloud};
