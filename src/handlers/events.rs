// Read-only query endpoints

use crate::core::state::AppState;
use crate::models::file::FileInfo;
use crate::models::general::GeneralInfo;
use crate::models::snapshot::TorrentSnapshot;
use crate::models::tracker::TrackerInfo;
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

/// Every current torrent snapshot
///
/// GET /json/events
pub async fn events_handler(State(state): State<Arc<AppState>>) -> Json<Vec<TorrentSnapshot>> {
    let snapshots = state
        .manager
        .query_all()
        .iter()
        .map(|snapshot| TorrentSnapshot::clone(snapshot))
        .collect();
    Json(snapshots)
}

/// GET /json/propertiesTrackers/{hash}
pub async fn trackers_handler(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Json<Vec<TrackerInfo>> {
    Json(state.manager.query_trackers(&hash))
}

/// GET /json/propertiesFiles/{hash}
pub async fn files_handler(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Json<Vec<FileInfo>> {
    Json(state.manager.query_files(&hash))
}

/// GET /json/propertiesGeneral/{hash}
pub async fn general_handler(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Json<GeneralInfo> {
    Json(state.manager.query_general(&hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_support::create_test_state;
    use crate::models::file::FileEntry;
    use crate::models::torrent::{EnginePhase, TorrentHandle};
    use crate::models::tracker::TrackerEntry;

    fn seed_torrent(state: &AppState) {
        let mut handle = TorrentHandle::new("aa", "debian.iso", EnginePhase::Seeding);
        handle.seed = true;
        handle.upload_payload_rate = 150_000;
        handle.files.push(FileEntry {
            path: "debian.iso".to_string(),
            size: 1024,
            downloaded: 1024,
            priority: 1,
        });
        handle.trackers.push(TrackerEntry {
            url: "http://tracker.debian.org/announce".to_string(),
            verified: true,
            ..Default::default()
        });
        state.engine.upsert(handle);
        state.manager.on_added("aa");
    }

    #[tokio::test]
    async fn test_events_handler() {
        let state = create_test_state();
        seed_torrent(&state);

        let Json(events) = events_handler(State(state)).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].hash, "aa");
        assert!(events[0].upspeed.ends_with("/s"));
    }

    #[tokio::test]
    async fn test_events_handler_json_shape() {
        use axum::body::Body;
        use axum::response::IntoResponse;
        use http_body_util::BodyExt;

        let state = create_test_state();
        seed_torrent(&state);

        let response = events_handler(State(state)).await.into_response();
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let first = &value[0];
        assert_eq!(first["state"], "seeding");
        assert_eq!(first["name"], "debian.iso");
        assert_eq!(first["priority"], "*");
        assert_eq!(first["eta"], "∞");
        assert_eq!(first["seed"], true);
    }

    #[tokio::test]
    async fn test_detail_handlers() {
        let state = create_test_state();
        seed_torrent(&state);

        let Json(trackers) =
            trackers_handler(State(Arc::clone(&state)), Path("aa".to_string())).await;
        assert_eq!(trackers.len(), 1);
        assert_eq!(trackers[0].status, "Working");

        let Json(files) = files_handler(State(Arc::clone(&state)), Path("aa".to_string())).await;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "debian.iso");
        assert_eq!(files[0].progress, 1.0);

        let Json(general) = general_handler(State(state), Path("aa".to_string())).await;
        assert!(general.share_ratio.is_some());
    }

    #[tokio::test]
    async fn test_detail_handlers_unknown_hash() {
        let state = create_test_state();

        let Json(trackers) =
            trackers_handler(State(Arc::clone(&state)), Path("zz".to_string())).await;
        assert!(trackers.is_empty());

        let Json(files) = files_handler(State(Arc::clone(&state)), Path("zz".to_string())).await;
        assert!(files.is_empty());

        let Json(general) = general_handler(State(state), Path("zz".to_string())).await;
        assert!(general.is_empty());
    }
}
