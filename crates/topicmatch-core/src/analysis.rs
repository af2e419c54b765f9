//! End-to-end analysis of one submitted document.
//!
//! model outputs -> top topics -> supervisor topic-weight table ->
//! per-topic recommendations, plus the words that describe each top topic.

use crate::error::{Result, TopicMatchError};
use crate::model::{SimilarityIndex, TopicModel, Vocabulary};
use crate::ranker::{recommend_for_topics, RankingPolicy};
use crate::topics::{top_topics, TopicWeightTable};
use crate::types::{Roster, TopicRecommendations, TopicScore, TopicWord};
use crate::words::{topic_words, words_for_topic};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Knobs for [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// How many of the document's topics to report.
    #[serde(default = "default_top_topics")]
    pub top_topics: usize,
    /// Words kept per topic (the word cloud input).
    #[serde(default = "default_words_per_topic")]
    pub words_per_topic: usize,
    /// Ranking thresholds. Configured on their own, so not part of the
    /// serialized settings.
    #[serde(skip)]
    pub policy: RankingPolicy,
}

fn default_top_topics() -> usize { 3 }
fn default_words_per_topic() -> usize { 20 }

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_topics: default_top_topics(),
            words_per_topic: default_words_per_topic(),
            policy: RankingPolicy::default(),
        }
    }
}

/// Words describing one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProfile {
    pub score: TopicScore,
    /// The top `words_per_topic` words, most probable first.
    pub words: Vec<TopicWord>,
}

impl TopicProfile {
    /// The leading words shown in the bar chart.
    pub fn chart_words(&self, limit: usize) -> Vec<TopicWord> {
        words_for_topic(&self.words, self.score.topic, limit)
    }
}

/// Everything the charts need for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub document: String,
    /// The document's heaviest topics, heaviest first.
    pub top_topics: Vec<TopicScore>,
    pub profiles: Vec<TopicProfile>,
    /// One list per top topic, in the same order.
    pub recommendations: Vec<TopicRecommendations>,
}

/// Analyse a document against the supervisor roster.
pub fn analyze<M>(
    model: &M,
    roster: &Roster,
    document: &str,
    settings: &AnalysisSettings,
) -> Result<Analysis>
where
    M: TopicModel + SimilarityIndex + Vocabulary + ?Sized,
{
    settings.policy.validate()?;

    let supervisors = model.supervisor_topics();
    if supervisors.len() != roster.len() {
        return Err(TopicMatchError::length_mismatch(
            "supervisor roster",
            supervisors.len(),
            roster.len(),
        ));
    }

    let distribution = model.document_topics(document)?;
    let top = top_topics(&distribution, settings.top_topics);

    let table = TopicWeightTable::from_distributions(supervisors, model.num_topics())?;
    let similarities = model.similarities(document)?;
    let topic_ids: Vec<_> = top.iter().map(|s| s.topic).collect();
    let recommendations =
        recommend_for_topics(&table, &topic_ids, &similarities, roster, &settings.policy)?;

    let all_words = topic_words(model, model, settings.words_per_topic)?;
    let profiles = top
        .iter()
        .map(|&score| TopicProfile {
            score,
            words: words_for_topic(&all_words, score.topic, settings.words_per_topic),
        })
        .collect();

    info!(
        document,
        topics = top.len(),
        recommended = recommendations.iter().map(|r| r.rows.len()).sum::<usize>(),
        "Analysed document"
    );

    Ok(Analysis {
        document: document.to_string(),
        top_topics: top,
        profiles,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelSnapshot;
    use crate::types::TopicId;

    fn snapshot() -> ModelSnapshot {
        ModelSnapshot::from_json(
            r#"{
            "vocabulary": ["policy", "climate", "labour", "court"],
            "topic_terms": [
                [0.6, 0.2, 0.1, 0.1],
                [0.1, 0.7, 0.1, 0.1],
                [0.1, 0.1, 0.2, 0.6],
                [0.25, 0.25, 0.25, 0.25]
            ],
            "supervisor_topics": [
                [[0, 0.9]],
                [[1, 0.8], [2, 0.2]],
                [[2, 0.7]],
                [[1, 0.55], [0, 0.45]]
            ],
            "documents": [
                {"id": "proposal",
                 "topics": [[0, 0.1], [1, 0.5], [2, 0.3], [3, 0.1]],
                 "similarities": [0.2, 0.6, 0.0, 0.4]}
            ]
        }"#,
        )
        .unwrap()
    }

    fn roster() -> Roster {
        Roster::new(["Ada Lovelace", "Grace Hopper", "Alan Turing", "Barbara Liskov"])
    }

    #[test]
    fn analysis_follows_top_topics() {
        let analysis = analyze(&snapshot(), &roster(), "proposal", &AnalysisSettings::default())
            .unwrap();

        let topics: Vec<TopicId> = analysis.top_topics.iter().map(|s| s.topic).collect();
        assert_eq!(topics, vec![TopicId(1), TopicId(2), TopicId(0)]);
        assert_eq!(analysis.recommendations.len(), 3);
        assert_eq!(analysis.profiles.len(), 3);

        // topic 1: Grace (0.6) and Barbara (0.4), ascending
        let t1: Vec<&str> = analysis.recommendations[0]
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(t1, vec!["Barbara Liskov", "Grace Hopper"]);

        // topic 2: only Alan qualifies on weight, but has zero similarity
        assert!(analysis.recommendations[1].rows.is_empty());

        assert_eq!(analysis.profiles[0].words[0].word, "climate");
        assert_eq!(analysis.profiles[0].chart_words(2).len(), 2);
    }

    #[test]
    fn roster_length_is_checked() {
        let short = Roster::new(["Ada Lovelace"]);
        let err = analyze(&snapshot(), &short, "proposal", &AnalysisSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            TopicMatchError::LengthMismatch { expected: 4, found: 1, .. }
        ));
    }

    #[test]
    fn invalid_policy_is_rejected_up_front() {
        let settings = AnalysisSettings {
            policy: RankingPolicy::default().with_top_k(0),
            ..AnalysisSettings::default()
        };
        let err = analyze(&snapshot(), &roster(), "proposal", &settings).unwrap_err();
        assert!(matches!(err, TopicMatchError::InvalidPolicy { .. }));
    }

    #[test]
    fn settings_deserialize_without_a_policy() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"top_topics": 2}"#).unwrap();
        assert_eq!(settings.top_topics, 2);
        assert_eq!(settings.words_per_topic, 20);
        assert_eq!(settings.policy, RankingPolicy::default());

        let json = serde_json::to_value(&settings).unwrap();
        assert!(json.get("policy").is_none());
    }

    #[test]
    fn unknown_document() {
        let err = analyze(&snapshot(), &roster(), "missing", &AnalysisSettings::default())
            .unwrap_err();
        assert!(matches!(err, TopicMatchError::DocumentNotFound(_)));
    }
}
