use crate::algorithms::top_n_by;
use crate::api::{EngagementEntry, HiddenGem, LeaderboardEntry};
use crate::models::AppRecord;

/// Size of the hidden-gems and top-engagement lists.
pub const HIGHLIGHT_COUNT: usize = 5;

/// Rank the filtered set by performance score and keep the first `top_n`.
pub fn compute_leaderboard(filtered: &[&AppRecord], top_n: usize) -> Vec<LeaderboardEntry> {
    top_n_by(filtered.iter().copied(), top_n, |r| r.performance_score)
        .into_iter()
        .enumerate()
        .map(|(idx, record)| LeaderboardEntry {
            rank: idx + 1,
            app: record.name.clone(),
            rating: record.rating,
            reviews: record.reviews,
            sentiment: record.sentiment,
            performance_score: record.performance_score,
            tier: record.tier(),
            sparkline: None,
        })
        .collect()
}

/// Top apps of the whole table by hidden-gem score. Filters do not apply.
pub fn compute_hidden_gems(records: &[AppRecord]) -> Vec<HiddenGem> {
    top_n_by(records, HIGHLIGHT_COUNT, |r| r.hidden_gem_score)
        .into_iter()
        .enumerate()
        .map(|(idx, record)| HiddenGem {
            rank: idx + 1,
            app: record.name.clone(),
            rating: record.rating,
            reviews: record.reviews,
            hidden_gem_score: record.hidden_gem_score,
        })
        .collect()
}

/// Top apps of the whole table by engagement score. Filters do not apply.
///
/// Zero-rated apps with reviews have an infinite score and rank first.
pub fn compute_top_engagement(records: &[AppRecord]) -> Vec<EngagementEntry> {
    top_n_by(records, HIGHLIGHT_COUNT, |r| r.engagement_score)
        .into_iter()
        .enumerate()
        .map(|(idx, record)| EngagementEntry {
            rank: idx + 1,
            app: record.name.clone(),
            rating: record.rating,
            reviews: record.reviews,
            engagement_score: record.engagement_score,
        })
        .collect()
}
