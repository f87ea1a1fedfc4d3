use crate::algorithms::{mean, round2};
use crate::api::{KpiSummary, LeaderboardEntry};
use crate::models::{AppRecord, Sentiment};

/// Compute the KPI cards from the filtered set and its leaderboard.
///
/// Every figure falls back to 0 when the filtered set is empty.
pub fn compute_kpis(filtered: &[&AppRecord], leaderboard: &[LeaderboardEntry]) -> KpiSummary {
    let total_apps = filtered.len();
    if total_apps == 0 {
        return KpiSummary::default();
    }

    let ratings: Vec<f64> = filtered.iter().map(|r| r.rating).collect();
    let positive_count = filtered
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();

    // NaN scores are skipped; all-NaN falls back to 0.
    let top_score = leaderboard
        .iter()
        .map(|e| e.performance_score)
        .filter(|s| !s.is_nan())
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
        .unwrap_or(0.0);

    KpiSummary {
        total_apps,
        avg_rating: round2(mean(&ratings)),
        positive_pct: round2(positive_count as f64 / total_apps as f64 * 100.0),
        top_score,
    }
}

#[cfg(test)]
#[path = "insights_tests.rs"]
mod insights_tests;
