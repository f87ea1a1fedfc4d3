//! Application state for the HTTP server.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::AppTable;
use crate::services::TrendGenerator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Derived app table, read-only after startup
    pub table: Arc<AppTable>,
    /// Source of sparkline and comparison jitter
    pub trends: Arc<Mutex<TrendGenerator>>,
}

impl AppState {
    /// Create a new application state around a loaded table.
    pub fn new(table: AppTable, trends: TrendGenerator) -> Self {
        Self {
            table: Arc::new(table),
            trends: Arc::new(Mutex::new(trends)),
        }
    }

    /// Seeded trends when a seed is given, entropy otherwise.
    pub fn with_trend_seed(table: AppTable, seed: Option<u64>) -> Self {
        let trends = match seed {
            Some(seed) => TrendGenerator::seeded(seed),
            None => TrendGenerator::from_entropy(),
        };
        Self::new(table, trends)
    }

    pub fn apps_loaded(&self) -> usize {
        self.table.len()
    }
}
