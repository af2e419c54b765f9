//! Recommendation ranker — picks the supervisors to show for one topic.
//!
//! Strategy:
//! 1. Keep supervisors whose weight for the topic exceeds `min_topic_weight`
//! 2. Of those, take the `top_k` most similar to the document
//! 3. Drop anyone whose similarity does not exceed `min_similarity`
//! 4. Order ascending by similarity, so a horizontal bar chart draws the
//!    best match on top
//! 5. Report similarity as a percentage

use crate::error::{Result, TopicMatchError};
use crate::topics::{descending, TopicWeightTable};
use crate::types::{Candidate, Recommendation, Roster, TopicId, TopicRecommendations};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Thresholds and cut-offs used by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPolicy {
    /// A supervisor must weigh strictly more than this on the topic.
    #[serde(default = "default_min_topic_weight")]
    pub min_topic_weight: f64,
    /// Maximum number of supervisors per topic.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Similarity must be strictly greater than this.
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

fn default_min_topic_weight() -> f64 { 0.5 }
fn default_top_k() -> usize { 5 }
fn default_min_similarity() -> f64 { 0.0 }

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            min_topic_weight: default_min_topic_weight(),
            top_k: default_top_k(),
            min_similarity: default_min_similarity(),
        }
    }
}

impl RankingPolicy {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_min_topic_weight(mut self, threshold: f64) -> Self {
        self.min_topic_weight = threshold;
        self
    }

    pub fn with_min_similarity(mut self, threshold: f64) -> Self {
        self.min_similarity = threshold;
        self
    }

    /// Reject policies that can never produce a row or cannot be compared.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(TopicMatchError::invalid_policy("top_k", "must be at least 1"));
        }
        if !self.min_topic_weight.is_finite() {
            return Err(TopicMatchError::invalid_policy(
                "min_topic_weight",
                format!("{} is not a finite number", self.min_topic_weight),
            ));
        }
        if !self.min_similarity.is_finite() {
            return Err(TopicMatchError::invalid_policy(
                "min_similarity",
                format!("{} is not a finite number", self.min_similarity),
            ));
        }
        Ok(())
    }
}

/// Zip parallel per-supervisor columns into explicit records.
///
/// All three inputs are aligned by position; differing lengths are an error.
pub fn candidates(names: &[String], topic_weights: &[f64], similarities: &[f64]) -> Result<Vec<Candidate>> {
    if topic_weights.len() != names.len() {
        return Err(TopicMatchError::length_mismatch(
            "topic weights",
            names.len(),
            topic_weights.len(),
        ));
    }
    if similarities.len() != names.len() {
        return Err(TopicMatchError::length_mismatch(
            "similarity scores",
            names.len(),
            similarities.len(),
        ));
    }

    Ok(names
        .iter()
        .zip(topic_weights)
        .zip(similarities)
        .map(|((name, &weight), &similarity)| Candidate::new(name.clone(), weight, similarity))
        .collect())
}

/// Rank candidates for one topic.
///
/// Ties in similarity keep the candidates' input order. An empty result is a
/// valid outcome.
pub fn recommend(candidates: &[Candidate], policy: &RankingPolicy) -> Vec<Recommendation> {
    let mut eligible: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.topic_weight > policy.min_topic_weight)
        .filter(|c| !c.similarity.is_nan())
        .collect();

    // Stable sort, so equal similarities stay in roster order.
    eligible.sort_by(|a, b| descending(a.similarity, b.similarity));
    eligible.truncate(policy.top_k);

    let mut selected: Vec<&Candidate> = eligible
        .into_iter()
        .filter(|c| c.similarity > policy.min_similarity)
        .take(policy.top_k)
        .collect();

    selected.sort_by(|a, b| {
        a.similarity
            .partial_cmp(&b.similarity)
            .unwrap_or(Ordering::Equal)
    });

    selected
        .into_iter()
        .map(|c| Recommendation {
            name: c.name.clone(),
            topic_weight: c.topic_weight,
            similarity_pct: c.similarity * 100.0,
        })
        .collect()
}

/// Column-oriented entry point: validates alignment, then ranks.
pub fn recommend_from_columns(
    topic_weights: &[f64],
    similarities: &[f64],
    names: &[String],
    policy: &RankingPolicy,
) -> Result<Vec<Recommendation>> {
    let candidates = candidates(names, topic_weights, similarities)?;
    Ok(recommend(&candidates, policy))
}

/// Rank supervisors independently for each of the given topics.
pub fn recommend_for_topics(
    table: &TopicWeightTable,
    topics: &[TopicId],
    similarities: &[f64],
    roster: &Roster,
    policy: &RankingPolicy,
) -> Result<Vec<TopicRecommendations>> {
    if table.len() != roster.len() {
        return Err(TopicMatchError::length_mismatch(
            "supervisor topic distributions",
            roster.len(),
            table.len(),
        ));
    }

    topics
        .iter()
        .map(|&topic| -> Result<TopicRecommendations> {
            let weights = table.column(topic)?;
            let rows = recommend_from_columns(&weights, similarities, roster.names(), policy)?;
            debug!(topic = topic.index(), rows = rows.len(), "Ranked supervisors");
            Ok(TopicRecommendations { topic, rows })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TopicScore;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn worked_example() {
        let weights = [0.9, 0.3, 0.7, 0.95, 0.1];
        let sims = [0.2, 0.8, 0.05, 0.9, 0.99];
        let rows = recommend_from_columns(
            &weights,
            &sims,
            &names(&["A", "B", "C", "D", "E"]),
            &RankingPolicy::default(),
        )
        .unwrap();

        let got: Vec<(&str, f64)> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.similarity_pct))
            .collect();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].0, "C");
        assert!((got[0].1 - 5.0).abs() < 1e-9);
        assert_eq!(got[1].0, "A");
        assert!((got[1].1 - 20.0).abs() < 1e-9);
        assert_eq!(got[2].0, "D");
        assert!((got[2].1 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn weight_threshold_is_strict() {
        let rows = recommend(&[Candidate::new("A", 0.5, 0.9)], &RankingPolicy::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn zero_similarity_is_dropped_after_selection() {
        let cands = vec![
            Candidate::new("A", 0.8, 0.0),
            Candidate::new("B", 0.8, 0.4),
        ];
        let rows = recommend(&cands, &RankingPolicy::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "B");
    }

    #[test]
    fn keeps_only_top_k() {
        let cands: Vec<Candidate> = (0..8)
            .map(|i| Candidate::new(format!("S{}", i), 0.9, 0.1 * (i + 1) as f64))
            .collect();
        let rows = recommend(&cands, &RankingPolicy::default());
        let got: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(got, vec!["S3", "S4", "S5", "S6", "S7"]);
    }

    #[test]
    fn ties_keep_roster_order() {
        let cands = vec![
            Candidate::new("A", 0.9, 0.5),
            Candidate::new("B", 0.9, 0.5),
            Candidate::new("C", 0.9, 0.5),
        ];
        let rows = recommend(&cands, &RankingPolicy::default().with_top_k(2));
        let got: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(got, vec!["A", "B"]);
    }

    #[test]
    fn nan_similarity_never_selected() {
        let cands = vec![
            Candidate::new("A", 0.9, f64::NAN),
            Candidate::new("B", 0.9, 0.3),
        ];
        let rows = recommend(&cands, &RankingPolicy::default().with_top_k(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "B");
    }

    #[test]
    fn custom_policy_thresholds() {
        let cands = vec![
            Candidate::new("A", 0.35, 0.2),
            Candidate::new("B", 0.25, 0.9),
            Candidate::new("C", 0.9, 0.05),
        ];
        let policy = RankingPolicy::default()
            .with_min_topic_weight(0.3)
            .with_min_similarity(0.1);
        let rows = recommend(&cands, &policy);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "A");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = recommend_from_columns(
            &[0.9, 0.8],
            &[0.5],
            &names(&["A", "B"]),
            &RankingPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TopicMatchError::LengthMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn policy_validation() {
        assert!(RankingPolicy::default().validate().is_ok());
        assert!(RankingPolicy::default().with_top_k(0).validate().is_err());
        assert!(RankingPolicy::default()
            .with_min_similarity(f64::NAN)
            .validate()
            .is_err());
        assert!(RankingPolicy::default()
            .with_min_topic_weight(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn policy_fields_default_when_missing() {
        let policy: RankingPolicy = serde_json::from_str(r#"{"top_k": 3}"#).unwrap();
        assert_eq!(policy.top_k, 3);
        assert_eq!(policy.min_topic_weight, 0.5);
        assert_eq!(policy.min_similarity, 0.0);
    }

    #[test]
    fn per_topic_lists_are_independent() {
        let dists = vec![
            vec![TopicScore::new(0, 0.9)],
            vec![TopicScore::new(1, 0.8)],
            vec![TopicScore::new(0, 0.6), TopicScore::new(1, 0.4)],
        ];
        let table = TopicWeightTable::from_distributions(&dists, 2).unwrap();
        let roster = Roster::new(["A", "B", "C"]);
        let sims = [0.4, 0.7, 0.1];

        let lists = recommend_for_topics(
            &table,
            &[TopicId(1), TopicId(0)],
            &sims,
            &roster,
            &RankingPolicy::default(),
        )
        .unwrap();

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].topic, TopicId(1));
        assert_eq!(lists[0].rows.len(), 1);
        assert_eq!(lists[0].rows[0].name, "B");
        let topic0: Vec<&str> = lists[1].rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(topic0, vec!["C", "A"]);
    }

    #[test]
    fn roster_must_match_table() {
        let table = TopicWeightTable::from_distributions(&[vec![], vec![]], 2).unwrap();
        let roster = Roster::new(["only one"]);
        let err = recommend_for_topics(
            &table,
            &[TopicId(0)],
            &[0.1],
            &roster,
            &RankingPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TopicMatchError::LengthMismatch { .. }));
    }
}
