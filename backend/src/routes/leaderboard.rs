use serde::{Deserialize, Serialize};

use crate::models::{Sentiment, ScoreTier};
use crate::routes::trends::TrendPoint;

// =========================================================
// Leaderboard types + route
// =========================================================

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based display rank
    pub rank: usize,
    pub app: String,
    pub rating: f64,
    pub reviews: f64,
    pub sentiment: Sentiment,
    pub performance_score: f64,
    pub tier: ScoreTier,
    /// Rating sparkline, only attached by the full dashboard view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<TrendPoint>>,
}

/// Route path for the leaderboard
pub const GET_LEADERBOARD: &str = "/leaderboard";
