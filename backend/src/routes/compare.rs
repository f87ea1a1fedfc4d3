use serde::{Deserialize, Serialize};

use crate::routes::trends::TrendPoint;

// =========================================================
// Compare types + route
// =========================================================

/// One app of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedApp {
    pub app: String,
    pub performance_score: f64,
    /// Legend label, e.g. `"Photo Editor (100.0 pts)"`
    pub label: String,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareData {
    pub apps: Vec<ComparedApp>,
}

/// Route path for the comparison view
pub const GET_COMPARE_DATA: &str = "/compare";
