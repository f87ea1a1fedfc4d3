//! # App Insights Backend
//!
//! Cleaning, scoring and ranking of Google Play app listings.
//!
//! The crate turns the raw Play Store CSV into a cleaned dataset, derives
//! per-app scores from it and answers the dashboard views (leaderboard,
//! hidden gems, engagement, sentiment mix, KPI cards, comparison trends,
//! CSV export) over a filtered snapshot. The views are served by an Axum
//! REST API.
//!
//! ## Architecture
//!
//! - [`io`]: CSV readers and writers for the raw, cleaned and export files
//! - [`transformations`]: cleaning rules and row filtering
//! - [`algorithms`]: score formulas and ranking helpers
//! - [`models`]: sentiment, score tiers, app records and filter criteria
//! - [`services`]: view computation over a filtered table
//! - [`routes`]: view types and route paths
//! - [`api`]: flat re-export of the public view types
//! - [`config`]: `insights.toml` and environment settings
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Pipeline
//!
//! ```text
//! raw csv ──clean──▶ cleaned csv ──load──▶ Vec<AppRecord> ──filter──▶ views
//! ```

// Allow large error types - InsightsError carries csv::Error and context
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{InsightsError, InsightsResult};
