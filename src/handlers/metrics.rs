// Metrics endpoint

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::admin::ApiKeyQuery;
use crate::utils::auth::authorize;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Event counters, tracked torrent count and uptime
///
/// GET /metrics?api_key=<key>
pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Response, ApiError> {
    authorize(&params.api_key, &state.config.auth.api_key, "metrics")?;

    let snapshot = state.metrics.get_snapshot(&state.store);

    Ok((StatusCode::OK, Json(snapshot)).into_response())
}
