//! Numeric building blocks shared by the dashboard views.

pub mod ranking;
pub mod scoring;

pub use ranking::{descending_nan_last, top_n_by};
pub use scoring::{engagement_score, hidden_gem_score, mean, performance_score, round2};
