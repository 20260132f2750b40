// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Queries
        .route("/json/events", get(crate::handlers::events::events_handler))
        .route(
            "/json/propertiesTrackers/{hash}",
            get(crate::handlers::events::trackers_handler),
        )
        .route(
            "/json/propertiesFiles/{hash}",
            get(crate::handlers::events::files_handler),
        )
        .route(
            "/json/propertiesGeneral/{hash}",
            get(crate::handlers::events::general_handler),
        )
        .route("/health", get(crate::handlers::health::health_handler))

        // Notifications and monitoring (require API key)
        .route("/torrent/added", post(crate::handlers::notify::torrent_added_handler))
        .route("/torrent/updated", post(crate::handlers::notify::torrent_updated_handler))
        .route("/torrent/removed", post(crate::handlers::notify::torrent_removed_handler))
        .route("/metrics", get(crate::handlers::metrics::metrics_handler))

        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
