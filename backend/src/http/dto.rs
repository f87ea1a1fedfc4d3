//! Data Transfer Objects for the HTTP API.
//!
//! View types are re-exported from the api module since they already derive
//! Serialize/Deserialize. This file adds the query strings and the health
//! response.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{InsightsError, InsightsResult};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CompareData, DashboardData, EngagementEntry, FilterCriteria, HiddenGem, KpiSummary,
    LeaderboardEntry, Sentiment, SentimentDistribution,
};

/// Filter controls shared by every dashboard endpoint.
///
/// Absent fields keep the [`FilterCriteria`] defaults. `sentiments` is a
/// comma separated, case-insensitive list; an empty value selects nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sentiments: Option<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl FilterQuery {
    /// Parse and validate into filter criteria.
    pub fn into_criteria(self) -> InsightsResult<FilterCriteria> {
        let mut criteria = FilterCriteria::default();
        if let Some(min_rating) = self.min_rating {
            criteria.min_rating = min_rating;
        }
        if let Some(list) = self.sentiments.as_deref() {
            criteria.allowed_sentiments = parse_sentiments(list)?.into_iter().collect();
        }
        if let Some(top_n) = self.top_n {
            criteria.top_n = top_n;
        }
        criteria.validate()?;
        Ok(criteria)
    }
}

/// Query parameters for the compare endpoint.
///
/// Carries the filter fields explicitly: the urlencoded deserializer cannot
/// parse numbers through `#[serde(flatten)]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompareQuery {
    /// Comma separated app names; absent means the first two leaderboard apps
    #[serde(default)]
    pub apps: Option<String>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sentiments: Option<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl CompareQuery {
    pub fn filter(&self) -> FilterQuery {
        FilterQuery {
            min_rating: self.min_rating,
            sentiments: self.sentiments.clone(),
            top_n: self.top_n,
        }
    }

    /// Requested names in order, blanks skipped.
    pub fn app_names(&self) -> Vec<String> {
        self.apps
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Rows in the loaded table
    pub apps_loaded: usize,
}

fn parse_sentiments(list: &str) -> InsightsResult<Vec<Sentiment>> {
    list.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| Sentiment::from_str(item).map_err(InsightsError::InvalidFilter))
        .collect()
}
