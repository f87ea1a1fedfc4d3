use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Trend types
// =========================================================

/// One day of a synthetic rating trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: NaiveDate,
    pub rating: f64,
}
