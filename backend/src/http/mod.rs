//! HTTP server module for the insights backend.
//!
//! This module exposes the dashboard views as a REST API. Handlers parse the
//! filter query, run one [`crate::services::DashboardQuery`] on the shared
//! table and serialize the resulting view.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Query parsing and filter validation                   │
//! │  - JSON / CSV responses                                  │
//! │  - CORS, compression, error handling                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Filtering, rankings, KPIs, trends                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Loaded table (Arc<AppTable>)                            │
//! │  - Read once from the cleaned CSV at startup             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
