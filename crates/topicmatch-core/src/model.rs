//! Model boundary — the outputs of the external topic-modeling application.
//!
//! Topic inference and similarity scoring happen upstream. This module only
//! describes what the rest of the workspace reads from them, as traits, plus
//! [`ModelSnapshot`], a JSON export of those outputs that implements all of
//! them.

use crate::error::{Result, TopicMatchError};
use crate::types::{TopicId, TopicScore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Maps internal feature ids to display strings.
pub trait Vocabulary {
    /// The display string for a feature id.
    fn term(&self, feature: usize) -> Option<&str>;

    /// Number of features.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A trained topic model's outputs.
pub trait TopicModel {
    /// Number of topics the model was trained with.
    fn num_topics(&self) -> usize;

    /// The term distribution of a topic, indexed by feature id.
    fn topic_terms(&self, topic: TopicId) -> Option<&[f64]>;

    /// The sparse topic distribution of a submitted document.
    fn document_topics(&self, document: &str) -> Result<Vec<TopicScore>>;

    /// Sparse topic distributions of the supervisor profiles, in roster order.
    fn supervisor_topics(&self) -> &[Vec<TopicScore>];
}

/// Similarity between a submitted document and each supervisor profile.
pub trait SimilarityIndex {
    /// One score per supervisor, in roster order.
    fn similarities(&self, document: &str) -> Result<Vec<f64>>;
}

/// Precomputed outputs for one submitted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentScores {
    pub id: String,
    pub topics: Vec<TopicScore>,
    pub similarities: Vec<f64>,
}

/// JSON export of everything the charts need from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// Display strings indexed by feature id.
    pub vocabulary: Vec<String>,
    /// One row per topic, one column per feature.
    pub topic_terms: Vec<Vec<f64>>,
    /// Topic distributions of the supervisor profiles.
    pub supervisor_topics: Vec<Vec<TopicScore>>,
    #[serde(default)]
    pub documents: Vec<DocumentScores>,
}

impl ModelSnapshot {
    /// Parse and validate a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ModelSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load and validate a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading model snapshot from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        info!(
            topics = snapshot.num_topics(),
            supervisors = snapshot.supervisor_count(),
            documents = snapshot.documents.len(),
            "Loaded model snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn supervisor_count(&self) -> usize {
        self.supervisor_topics.len()
    }

    /// The precomputed outputs for a document.
    pub fn document(&self, id: &str) -> Result<&DocumentScores> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| TopicMatchError::document_not_found(id))
    }

    /// Id of the first exported document, used when none is named.
    pub fn default_document(&self) -> Option<&str> {
        self.documents.first().map(|d| d.id.as_str())
    }

    /// Check the snapshot's internal shape.
    ///
    /// Every topic-term row spans the vocabulary, every topic id refers to an
    /// existing topic, and every document carries one similarity per
    /// supervisor profile.
    pub fn validate(&self) -> Result<()> {
        let num_topics = self.num_topics();
        if num_topics == 0 {
            return Err(TopicMatchError::invalid_snapshot("model has no topics"));
        }

        for (topic, row) in self.topic_terms.iter().enumerate() {
            if row.len() != self.vocabulary.len() {
                return Err(TopicMatchError::length_mismatch(
                    format!("term distribution of topic {}", topic),
                    self.vocabulary.len(),
                    row.len(),
                ));
            }
        }

        let distributions = self
            .supervisor_topics
            .iter()
            .chain(self.documents.iter().map(|d| &d.topics));
        for dist in distributions {
            if let Some(bad) = dist.iter().find(|s| s.topic.index() >= num_topics) {
                return Err(TopicMatchError::TopicOutOfRange {
                    topic: bad.topic.index(),
                    num_topics,
                });
            }
        }

        for doc in &self.documents {
            if doc.similarities.len() != self.supervisor_count() {
                return Err(TopicMatchError::length_mismatch(
                    format!("similarities of document '{}'", doc.id),
                    self.supervisor_count(),
                    doc.similarities.len(),
                ));
            }
        }

        Ok(())
    }
}

impl Vocabulary for ModelSnapshot {
    fn term(&self, feature: usize) -> Option<&str> {
        self.vocabulary.get(feature).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.vocabulary.len()
    }
}

impl TopicModel for ModelSnapshot {
    fn num_topics(&self) -> usize {
        self.topic_terms.len()
    }

    fn topic_terms(&self, topic: TopicId) -> Option<&[f64]> {
        self.topic_terms.get(topic.index()).map(Vec::as_slice)
    }

    fn document_topics(&self, document: &str) -> Result<Vec<TopicScore>> {
        Ok(self.document(document)?.topics.clone())
    }

    fn supervisor_topics(&self) -> &[Vec<TopicScore>] {
        &self.supervisor_topics
    }
}

impl SimilarityIndex for ModelSnapshot {
    fn similarities(&self, document: &str) -> Result<Vec<f64>> {
        Ok(self.document(document)?.similarities.clone())
    }
}
