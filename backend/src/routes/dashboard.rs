use serde::{Deserialize, Serialize};

use crate::models::FilterCriteria;
use crate::routes::distribution::SentimentDistribution;
use crate::routes::highlights::{EngagementEntry, HiddenGem};
use crate::routes::insights::KpiSummary;
use crate::routes::leaderboard::LeaderboardEntry;

// =========================================================
// Dashboard types + routes
// =========================================================

/// Everything one dashboard refresh renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub criteria: FilterCriteria,
    pub kpis: KpiSummary,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub hidden_gems: Vec<HiddenGem>,
    pub top_engagement: Vec<EngagementEntry>,
    pub sentiment_distribution: SentimentDistribution,
}

/// Route path for the full dashboard
pub const GET_DASHBOARD: &str = "/dashboard";

/// Route path for the filtered CSV download
pub const GET_EXPORT: &str = "/export";

/// File name offered for the CSV download
pub const EXPORT_FILE_NAME: &str = "filtered_apps.csv";
