//! # topicmatch core
//!
//! Turns precomputed topic-model outputs into supervisor recommendations.
//!
//! The topic model and the similarity model run upstream; this crate reads
//! their outputs through the traits in [`model`] and provides:
//!
//! - **topics** — a document's heaviest topics and the supervisor topic-weight table
//! - **words** — the most probable words of each topic
//! - **ranker** — per-topic supervisor ranking under a configurable [`ranker::RankingPolicy`]
//! - **analysis** — the whole pipeline for one document
//!
//! ## Quick Start
//!
//! ```rust
//! use topicmatch_core::prelude::*;
//!
//! let names: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
//! let rows = recommend_from_columns(
//!     &[0.9, 0.3, 0.7, 0.95, 0.1],
//!     &[0.2, 0.8, 0.05, 0.9, 0.99],
//!     &names,
//!     &RankingPolicy::default(),
//! ).unwrap();
//!
//! let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(order, ["C", "A", "D"]);
//! ```

pub mod types;
pub mod error;
pub mod model;
pub mod topics;
pub mod words;
pub mod ranker;
pub mod analysis;
pub mod prelude;

pub use error::{Result, TopicMatchError};
