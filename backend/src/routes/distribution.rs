use serde::{Deserialize, Serialize};

use crate::models::Sentiment;

// =========================================================
// Sentiment distribution types + route
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Counts per sentiment over the filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub counts: Vec<SentimentCount>,
    pub total: usize,
}

impl SentimentDistribution {
    pub fn count_of(&self, sentiment: Sentiment) -> usize {
        self.counts
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Route path for the sentiment distribution
pub const GET_SENTIMENT_DISTRIBUTION: &str = "/sentiment-distribution";
