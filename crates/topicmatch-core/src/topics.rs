//! Topic ranking and the supervisor topic-weight table.

use crate::error::{Result, TopicMatchError};
use crate::types::{TopicId, TopicScore};
use std::cmp::Ordering;

/// The `n` heaviest topics of a distribution, heaviest first.
///
/// Ties keep their input order. A distribution with fewer than `n` topics
/// is returned whole.
pub fn top_topics(distribution: &[TopicScore], n: usize) -> Vec<TopicScore> {
    let mut ranked = distribution.to_vec();
    ranked.sort_by(|a, b| descending(a.weight, b.weight));
    ranked.truncate(n);
    ranked
}

/// Expand a sparse distribution into one weight per topic.
///
/// Topics the distribution does not mention get 0.0. A repeated topic keeps
/// its last weight.
pub fn dense_row(distribution: &[TopicScore], num_topics: usize) -> Result<Vec<f64>> {
    let mut row = vec![0.0; num_topics];
    for score in distribution {
        let slot = row
            .get_mut(score.topic.index())
            .ok_or(TopicMatchError::TopicOutOfRange {
                topic: score.topic.index(),
                num_topics,
            })?;
        *slot = score.weight;
    }
    Ok(row)
}

/// Per-supervisor topic weights, one dense row per supervisor profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicWeightTable {
    num_topics: usize,
    rows: Vec<Vec<f64>>,
}

impl TopicWeightTable {
    pub fn from_distributions(distributions: &[Vec<TopicScore>], num_topics: usize) -> Result<Self> {
        let rows = distributions
            .iter()
            .map(|dist| dense_row(dist, num_topics))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { num_topics, rows })
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    /// Number of supervisors.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every supervisor's weight for one topic, in roster order.
    pub fn column(&self, topic: TopicId) -> Result<Vec<f64>> {
        if topic.index() >= self.num_topics {
            return Err(TopicMatchError::TopicOutOfRange {
                topic: topic.index(),
                num_topics: self.num_topics,
            });
        }
        Ok(self.rows.iter().map(|row| row[topic.index()]).collect())
    }

    pub fn row(&self, supervisor: usize) -> Option<&[f64]> {
        self.rows.get(supervisor).map(Vec::as_slice)
    }
}

/// Comparator for heaviest-first sorting. NaN sorts last.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
