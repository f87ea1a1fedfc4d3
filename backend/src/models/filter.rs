use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::app::Sentiment;
use crate::error::{InsightsError, InsightsResult};

/// Largest `top_n` a caller may request.
pub const MAX_TOP_N: usize = 50;
/// Ratings live on a 0-5 star scale.
pub const MAX_RATING: f64 = 5.0;

/// User-chosen filter parameters for the leaderboard, distribution and KPI views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_rating: f64,
    pub allowed_sentiments: BTreeSet<Sentiment>,
    pub top_n: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            allowed_sentiments: Sentiment::ALL.into_iter().collect(),
            top_n: 10,
        }
    }
}

impl FilterCriteria {
    pub fn new(
        min_rating: f64,
        allowed_sentiments: impl IntoIterator<Item = Sentiment>,
        top_n: usize,
    ) -> Self {
        Self {
            min_rating,
            allowed_sentiments: allowed_sentiments.into_iter().collect(),
            top_n,
        }
    }

    /// Whether a record with this rating and sentiment belongs to the filtered set.
    pub fn matches(&self, rating: f64, sentiment: Sentiment) -> bool {
        rating >= self.min_rating && self.allowed_sentiments.contains(&sentiment)
    }

    /// Check the ranges the dashboard controls allow.
    pub fn validate(&self) -> InsightsResult<()> {
        if !self.min_rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.min_rating) {
            return Err(InsightsError::InvalidFilter(format!(
                "min_rating must be between 0 and {}, got {}",
                MAX_RATING, self.min_rating
            )));
        }
        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            return Err(InsightsError::InvalidFilter(format!(
                "top_n must be between 1 and {}, got {}",
                MAX_TOP_N, self.top_n
            )));
        }
        Ok(())
    }
}
