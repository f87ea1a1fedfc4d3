//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{compare, dashboard, distribution, highlights, insights, leaderboard};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive, the dashboard is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(insights::GET_KPIS, get(handlers::get_kpis))
        .route(leaderboard::GET_LEADERBOARD, get(handlers::get_leaderboard))
        .route(highlights::GET_HIDDEN_GEMS, get(handlers::get_hidden_gems))
        .route(highlights::GET_TOP_ENGAGEMENT, get(handlers::get_top_engagement))
        .route(
            distribution::GET_SENTIMENT_DISTRIBUTION,
            get(handlers::get_sentiment_distribution),
        )
        .route(compare::GET_COMPARE_DATA, get(handlers::compare_apps))
        .route(dashboard::GET_EXPORT, get(handlers::export_csv));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
