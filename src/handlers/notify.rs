// Change-notification endpoints used by the session to push raw state

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::events::dispatcher::TorrentEvent;
use crate::models::admin::{ApiKeyQuery, SuccessResponse, TorrentRemoveQuery};
use crate::models::torrent::{normalize_id, TorrentHandle};
use crate::utils::auth::authorize;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Record a new torrent and queue its first snapshot
///
/// POST /torrent/added?api_key=<key> with a raw torrent JSON body
pub async fn torrent_added_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
    Json(handle): Json<TorrentHandle>,
) -> Result<Response, ApiError> {
    authorize(&params.api_key, &state.config.auth.api_key, "torrent/added")?;

    let hash = record_handle(&state, handle)?;
    enqueue(&state, TorrentEvent::Added(hash.clone())).await?;

    info!(torrent = %hash, "Torrent added");

    Ok(accepted("Torrent added"))
}

/// Record fresh raw state for a torrent and queue a snapshot rebuild
///
/// POST /torrent/updated?api_key=<key> with a raw torrent JSON body
pub async fn torrent_updated_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
    Json(handle): Json<TorrentHandle>,
) -> Result<Response, ApiError> {
    authorize(&params.api_key, &state.config.auth.api_key, "torrent/updated")?;

    let hash = record_handle(&state, handle)?;
    enqueue(&state, TorrentEvent::Updated(hash.clone())).await?;

    debug!(torrent = %hash, "Torrent updated");

    Ok(accepted("Torrent updated"))
}

/// Forget a torrent; unknown hashes are accepted
///
/// POST /torrent/removed?api_key=<key>&hash=<hash>
pub async fn torrent_removed_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TorrentRemoveQuery>,
) -> Result<Response, ApiError> {
    authorize(&params.api_key, &state.config.auth.api_key, "torrent/removed")?;

    let hash = normalize_id(&params.hash)
        .ok_or_else(|| ApiError::InvalidParameter("hash must not be empty".to_string()))?;

    state.engine.remove(&hash);
    enqueue(&state, TorrentEvent::Removed(hash.clone())).await?;

    info!(torrent = %hash, "Torrent removed");

    Ok(accepted("Torrent removed"))
}

fn record_handle(state: &AppState, mut handle: TorrentHandle) -> Result<String, ApiError> {
    let hash = normalize_id(&handle.hash)
        .ok_or_else(|| ApiError::InvalidParameter("hash must not be empty".to_string()))?;

    handle.hash = hash.clone();
    state.engine.upsert(handle);
    Ok(hash)
}

async fn enqueue(state: &AppState, event: TorrentEvent) -> Result<(), ApiError> {
    state
        .events
        .send(event)
        .await
        .map_err(|_| ApiError::QueueClosed)
}

fn accepted(message: &str) -> Response {
    (
        StatusCode::ACCEPTED,
        Json(SuccessResponse {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}
