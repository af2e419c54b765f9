//! topicmatch core prelude — convenient imports for common usage.
//!
//! ```rust
//! use topicmatch_core::prelude::*;
//! ```

pub use crate::types::{
    TopicId, TopicScore, TopicWord,
    Candidate, Recommendation, TopicRecommendations,
    Roster,
};

pub use crate::model::{DocumentScores, ModelSnapshot, SimilarityIndex, TopicModel, Vocabulary};

pub use crate::topics::{dense_row, top_topics, TopicWeightTable};

pub use crate::words::{capitalize, topic_words, words_for_topic};

pub use crate::ranker::{
    candidates, recommend, recommend_for_topics, recommend_from_columns, RankingPolicy,
};

pub use crate::analysis::{analyze, Analysis, AnalysisSettings, TopicProfile};

pub use crate::error::{Result, TopicMatchError};
