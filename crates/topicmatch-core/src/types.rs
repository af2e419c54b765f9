//! Shared types used across topicmatch crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a topic in the topic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub usize);

impl TopicId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a topic distribution: how strongly a topic is present.
///
/// Serialized as a `[topic, weight]` pair, the shape topic-model toolkits
/// emit for sparse document distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(TopicId, f64)", into = "(TopicId, f64)")]
pub struct TopicScore {
    pub topic: TopicId,
    pub weight: f64,
}

impl TopicScore {
    pub fn new(topic: usize, weight: f64) -> Self {
        Self {
            topic: TopicId(topic),
            weight,
        }
    }
}

impl From<(TopicId, f64)> for TopicScore {
    fn from((topic, weight): (TopicId, f64)) -> Self {
        Self { topic, weight }
    }
}

impl From<TopicScore> for (TopicId, f64) {
    fn from(score: TopicScore) -> Self {
        (score.topic, score.weight)
    }
}

/// A term and its probability within one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicWord {
    pub topic: TopicId,
    pub word: String,
    pub value: f64,
}

/// A supervisor eligible for ranking, joined explicitly by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// The supervisor's weight for the topic being ranked.
    pub topic_weight: f64,
    /// Similarity between the supervisor's profile and the document.
    pub similarity: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, topic_weight: f64, similarity: f64) -> Self {
        Self {
            name: name.into(),
            topic_weight,
            similarity,
        }
    }
}

/// A ranked supervisor ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub topic_weight: f64,
    /// Similarity scaled to a percentage.
    pub similarity_pct: f64,
}

/// The recommendation list for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecommendations {
    pub topic: TopicId,
    /// Ascending by similarity.
    pub rows: Vec<Recommendation>,
}

/// The ordered list of supervisor names.
///
/// Position is the join key shared with the model's similarity vector and
/// the supervisor topic-weight table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_score_serializes_as_pair() {
        let score = TopicScore::new(4, 0.25);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "[4,0.25]");

        let back: TopicScore = serde_json::from_str("[7, 0.5]").unwrap();
        assert_eq!(back, TopicScore::new(7, 0.5));
    }

    #[test]
    fn roster_is_a_plain_list() {
        let roster: Roster = serde_json::from_str(r#"["Ada Lovelace", "Alan Turing"]"#).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(1), Some("Alan Turing"));
        assert_eq!(roster.get(2), None);
    }
}
