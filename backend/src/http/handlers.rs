//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the computation.

use axum::{
    extract::{FromRequestParts, Query, State},
    http::{header, request::Parts},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;

use super::dto::{
    CompareData, CompareQuery, DashboardData, EngagementEntry, FilterQuery, HealthResponse,
    HiddenGem, KpiSummary, LeaderboardEntry, SentimentDistribution,
};
use super::error::AppError;
use super::state::AppState;
use crate::routes::dashboard::EXPORT_FILE_NAME;
use crate::services::DashboardQuery;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// [`Query`] whose rejection is an [`AppError`] JSON body.
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Parse the filter and run `f` on the shared table off the async runtime.
async fn with_query<T, F>(state: AppState, query: FilterQuery, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&DashboardQuery<'_>, &AppState) -> Result<T, AppError> + Send + 'static,
{
    let criteria = query.into_criteria()?;
    tokio::task::spawn_blocking(move || {
        let dashboard = DashboardQuery::new(&state.table, criteria);
        f(&dashboard, &state)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting how many apps were loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        apps_loaded: state.apps_loaded(),
    }))
}

// =============================================================================
// Dashboard Views
// =============================================================================

/// GET /v1/dashboard
///
/// Every view for one filter, leaderboard rows with sparklines.
pub async fn get_dashboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<DashboardData> {
    let data = with_query(state, query, |dashboard, state| {
        let mut trends = state.trends.lock();
        Ok(dashboard.dashboard(Some(&mut *trends)))
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/kpis
pub async fn get_kpis(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<KpiSummary> {
    let data = with_query(state, query, |dashboard, _| Ok(dashboard.kpis())).await?;
    Ok(Json(data))
}

/// GET /v1/leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<Vec<LeaderboardEntry>> {
    let data = with_query(state, query, |dashboard, _| Ok(dashboard.leaderboard())).await?;
    Ok(Json(data))
}

/// GET /v1/hidden-gems
///
/// Computed over the whole table; filter parameters are still validated.
pub async fn get_hidden_gems(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<Vec<HiddenGem>> {
    let data = with_query(state, query, |dashboard, _| Ok(dashboard.hidden_gems())).await?;
    Ok(Json(data))
}

/// GET /v1/engagement
pub async fn get_top_engagement(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<Vec<EngagementEntry>> {
    let data = with_query(state, query, |dashboard, _| Ok(dashboard.top_engagement())).await?;
    Ok(Json(data))
}

/// GET /v1/sentiment-distribution
pub async fn get_sentiment_distribution(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<SentimentDistribution> {
    let data = with_query(state, query, |dashboard, _| {
        Ok(dashboard.sentiment_distribution())
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/compare?apps=a,b
///
/// Trend series for the named leaderboard apps.
pub async fn compare_apps(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CompareQuery>,
) -> HandlerResult<CompareData> {
    let names = query.app_names();
    let data = with_query(state, query.filter(), move |dashboard, state| {
        let mut trends = state.trends.lock();
        Ok(dashboard.compare(&names, &mut *trends)?)
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/export
///
/// The filtered set as a CSV attachment.
pub async fn export_csv(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let body = with_query(state, query, |dashboard, _| Ok(dashboard.export_csv()?)).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
