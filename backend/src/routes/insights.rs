use serde::{Deserialize, Serialize};

// =========================================================
// KPI types + route
// =========================================================

/// Headline metrics of the filtered set. All zero when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_apps: usize,
    pub avg_rating: f64,
    /// Share of Positive apps, in percent
    pub positive_pct: f64,
    /// Best performance score on the leaderboard
    pub top_score: f64,
}

/// Route path for KPI cards
pub const GET_KPIS: &str = "/kpis";
