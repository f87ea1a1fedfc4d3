use chrono::NaiveDate;

use crate::api::{CompareData, ComparedApp, LeaderboardEntry};
use crate::error::{InsightsError, InsightsResult};
use crate::io::format_float;
use crate::services::trends::TrendGenerator;

/// Apps preselected when the caller names none.
pub const DEFAULT_COMPARE_COUNT: usize = 2;

/// The first leaderboard apps, used as the default comparison.
pub fn default_selection(leaderboard: &[LeaderboardEntry]) -> Vec<String> {
    leaderboard
        .iter()
        .take(DEFAULT_COMPARE_COUNT)
        .map(|e| e.app.clone())
        .collect()
}

/// Build trend series for the named leaderboard apps.
///
/// Names are resolved against the leaderboard (first match wins), in the
/// order given. Any number of names is accepted.
pub fn compute_compare_data(
    leaderboard: &[LeaderboardEntry],
    names: &[String],
    generator: &mut TrendGenerator,
    end: NaiveDate,
) -> InsightsResult<CompareData> {
    let mut apps = Vec::with_capacity(names.len());
    for name in names {
        let entry = leaderboard
            .iter()
            .find(|e| &e.app == name)
            .ok_or_else(|| InsightsError::UnknownApp(name.clone()))?;
        apps.push(ComparedApp {
            app: entry.app.clone(),
            performance_score: entry.performance_score,
            label: format!("{} ({} pts)", entry.app, format_float(entry.performance_score)),
            trend: generator.series(entry.rating, end),
        });
    }
    Ok(CompareData { apps })
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod compare_tests;
