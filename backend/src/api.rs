//! Public API surface for the dashboard backend.
//!
//! This file consolidates the view types handed to the presentation layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{AppRecord, FilterCriteria, ScoreTier, Sentiment};
pub use crate::routes::compare::ComparedApp;
pub use crate::routes::compare::CompareData;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::distribution::SentimentCount;
pub use crate::routes::distribution::SentimentDistribution;
pub use crate::routes::highlights::EngagementEntry;
pub use crate::routes::highlights::HiddenGem;
pub use crate::routes::insights::KpiSummary;
pub use crate::routes::leaderboard::LeaderboardEntry;
pub use crate::routes::trends::TrendPoint;
