//! Service layer: the views computed from a loaded app table.
//!
//! Services take the derived records (or a filtered slice of them) and build
//! the route types in [`crate::routes`]. [`dashboard::DashboardQuery`] ties
//! them together for a single filter evaluation.

pub mod compare;
pub mod dashboard;
pub mod distributions;
pub mod insights;
pub mod rankings;
pub mod trends;

pub use compare::compute_compare_data;
pub use dashboard::DashboardQuery;
pub use distributions::compute_sentiment_distribution;
pub use insights::compute_kpis;
pub use rankings::{compute_hidden_gems, compute_leaderboard, compute_top_engagement};
pub use trends::TrendGenerator;
