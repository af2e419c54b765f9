//! Top words per topic.

use crate::error::{Result, TopicMatchError};
use crate::model::{TopicModel, Vocabulary};
use crate::topics::descending;
use crate::types::{TopicId, TopicWord};

/// The `n_words` most probable terms of every topic.
///
/// Rows are grouped by topic in topic order; within a topic they run from
/// most to least probable, ties broken by feature id.
pub fn topic_words<M, V>(model: &M, vocabulary: &V, n_words: usize) -> Result<Vec<TopicWord>>
where
    M: TopicModel + ?Sized,
    V: Vocabulary + ?Sized,
{
    let mut words = Vec::with_capacity(model.num_topics() * n_words);

    for topic in (0..model.num_topics()).map(TopicId) {
        let terms = model.topic_terms(topic).ok_or(TopicMatchError::TopicOutOfRange {
            topic: topic.index(),
            num_topics: model.num_topics(),
        })?;

        let mut features: Vec<usize> = (0..terms.len()).collect();
        features.sort_by(|&a, &b| descending(terms[a], terms[b]));

        for feature in features.into_iter().take(n_words) {
            let word = vocabulary
                .term(feature)
                .ok_or(TopicMatchError::UnknownFeature(feature))?;
            words.push(TopicWord {
                topic,
                word: word.to_string(),
                value: terms[feature],
            });
        }
    }

    Ok(words)
}

/// The first `limit` rows of one topic from a [`topic_words`] table.
pub fn words_for_topic(table: &[TopicWord], topic: TopicId, limit: usize) -> Vec<TopicWord> {
    table
        .iter()
        .filter(|w| w.topic == topic)
        .take(limit)
        .cloned()
        .collect()
}

/// Display form of a word: first letter upper-case, the rest lower-case.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
