//! Error types for topicmatch operations.
//!
//! Parallel inputs (roster, similarity scores, topic weights) are joined by
//! position, so most failures here are shape errors caught at that boundary.

use thiserror::Error;

/// Result type for topicmatch operations.
pub type Result<T> = std::result::Result<T, TopicMatchError>;

/// Errors that can occur while analysing model outputs.
#[derive(Debug, Error)]
pub enum TopicMatchError {
    /// Two sequences that are joined by position differ in length.
    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// A topic id outside the model's topic range.
    #[error("Topic {topic} out of range (model has {num_topics} topics)")]
    TopicOutOfRange { topic: usize, num_topics: usize },

    /// A feature id with no vocabulary entry.
    #[error("Unknown feature id: {0}")]
    UnknownFeature(usize),

    /// No precomputed output for the requested document.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// A ranking policy parameter is unusable.
    #[error("Invalid ranking policy field {field}: {reason}")]
    InvalidPolicy { field: String, reason: String },

    /// A chart or word cloud setting cannot be rendered.
    #[error("Invalid chart setting {field}: {reason}")]
    InvalidChart { field: String, reason: String },

    /// The model snapshot is internally inconsistent.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl TopicMatchError {
    pub fn length_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        TopicMatchError::LengthMismatch {
            what: what.into(),
            expected,
            found,
        }
    }

    pub fn document_not_found(id: impl Into<String>) -> Self {
        TopicMatchError::DocumentNotFound(id.into())
    }

    pub fn invalid_policy(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TopicMatchError::InvalidPolicy {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_chart(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TopicMatchError::InvalidChart {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        TopicMatchError::InvalidSnapshot(msg.into())
    }
}
