// Aggregation facade: turns engine state into snapshots and detail views

use crate::engine::Engine;
use crate::metrics::collector::Metrics;
use crate::models::file::FileInfo;
use crate::models::general::GeneralInfo;
use crate::models::snapshot::{DisplayState, TorrentSnapshot};
use crate::models::torrent::TorrentHandle;
use crate::models::tracker::TrackerInfo;
use crate::status::classifier::{classify, StatusInput};
use crate::status::ratio::share_ratio;
use crate::stores::snapshot_store::SnapshotStore;
use crate::utils::format::{
    format_ratio, friendly_duration, friendly_eta, friendly_limit, friendly_rate, friendly_unit,
    INFINITY,
};
use std::sync::Arc;
use tracing::debug;

/// Marker shown instead of a queue position
const NO_QUEUE_POSITION: &str = "*";

pub struct EventManager {
    engine: Arc<dyn Engine>,
    store: Arc<SnapshotStore>,
    metrics: Arc<Metrics>,
}

impl EventManager {
    pub fn new(engine: Arc<dyn Engine>, store: Arc<SnapshotStore>, metrics: Arc<Metrics>) -> Self {
        Self {
            engine,
            store,
            metrics,
        }
    }

    /// A torrent appeared in the session
    pub fn on_added(&self, id: &str) {
        if self.refresh(id) {
            self.metrics.increment_added();
        }
    }

    /// A torrent's raw state changed
    pub fn on_updated(&self, id: &str) {
        if self.refresh(id) {
            self.metrics.increment_updated();
        }
    }

    /// A torrent left the session; safe for ids that were never added
    pub fn on_removed(&self, id: &str) {
        if self.store.remove(id).is_some() {
            self.metrics.increment_removed();
            debug!(torrent = %id, "Snapshot removed");
        } else {
            debug!(torrent = %id, "Removal for untracked torrent ignored");
        }
    }

    /// Every current snapshot, served from the store only
    pub fn query_all(&self) -> Vec<Arc<TorrentSnapshot>> {
        self.store.list_all()
    }

    pub fn query_trackers(&self, id: &str) -> Vec<TrackerInfo> {
        match self.engine.handle(id) {
            Some(handle) => handle.trackers.iter().map(TrackerInfo::from).collect(),
            None => Vec::new(),
        }
    }

    pub fn query_files(&self, id: &str) -> Vec<FileInfo> {
        let Some(handle) = self.engine.handle(id) else {
            return Vec::new();
        };

        let single_file = handle.files.len() == 1;
        handle
            .files
            .iter()
            .map(|file| FileInfo::from_entry(file, &handle.name, single_file))
            .collect()
    }

    pub fn query_general(&self, id: &str) -> GeneralInfo {
        match self.engine.handle(id) {
            Some(handle) => general_info(&handle, self.engine.save_path(id)),
            None => GeneralInfo::default(),
        }
    }

    /// Rebuild and store the snapshot for `id`; false if the handle is gone
    fn refresh(&self, id: &str) -> bool {
        let Some(handle) = self.engine.handle(id) else {
            self.metrics.increment_dropped();
            debug!(torrent = %id, "Event for invalid torrent handle dropped");
            return false;
        };

        let snapshot = build_snapshot(id, &handle, self.engine.as_ref());
        if snapshot.state == DisplayState::Unknown {
            self.metrics.increment_unknown();
        }

        debug!(torrent = %id, state = %snapshot.state, "Snapshot updated");
        self.store.upsert(id.to_string(), snapshot);
        true
    }
}

/// Derive the display snapshot of one torrent
///
/// Engine lookups and the snapshot's `hash` both use `id`, the store key.
pub fn build_snapshot(id: &str, handle: &TorrentHandle, engine: &dyn Engine) -> TorrentSnapshot {
    let queueing_enabled = engine.is_queueing_enabled();
    let state = classify(&StatusInput::from_handle(handle, queueing_enabled));

    let eta = if state.has_eta() {
        friendly_eta(engine.eta(id))
    } else {
        INFINITY.to_string()
    };

    let priority = if queueing_enabled && handle.queue_position >= 0 {
        handle.queue_position.to_string()
    } else {
        NO_QUEUE_POSITION.to_string()
    };

    let leechers = handle.num_peers.saturating_sub(handle.num_seeds);

    TorrentSnapshot {
        state,
        name: handle.name.clone(),
        size: friendly_unit(handle.actual_size),
        progress: handle.progress,
        dlspeed: friendly_rate(handle.download_payload_rate),
        upspeed: friendly_rate(handle.upload_payload_rate),
        priority,
        num_seeds: with_swarm_count(handle.num_seeds, handle.num_complete),
        num_leechs: with_swarm_count(leechers, handle.num_incomplete),
        seed: handle.seed,
        ratio: format_ratio(engine.real_ratio(id)),
        eta,
        hash: id.to_string(),
    }
}

/// `"3 (10)"`: connected peers, then the swarm-wide count when known
fn with_swarm_count(connected: u32, swarm: u32) -> String {
    if swarm > 0 {
        format!("{} ({})", connected, swarm)
    } else {
        connected.to_string()
    }
}

fn general_info(handle: &TorrentHandle, save_path: Option<String>) -> GeneralInfo {
    let mut time_elapsed = friendly_duration(handle.active_time);
    if handle.seed {
        time_elapsed.push_str(&format!(
            " (Seeded for {})",
            friendly_duration(handle.seeding_time)
        ));
    }

    let ratio = share_ratio(handle.total_payload_upload, handle.total_payload_download);

    GeneralInfo {
        save_path,
        creation_date: handle.creation_date,
        comment: Some(handle.comment.clone()),
        total_wasted: Some(friendly_unit(
            handle.total_failed_bytes.saturating_add(handle.total_redundant_bytes),
        )),
        total_uploaded: Some(format!(
            "{} ({} this session)",
            friendly_unit(handle.all_time_upload),
            friendly_unit(handle.total_payload_upload)
        )),
        total_downloaded: Some(format!(
            "{} ({} this session)",
            friendly_unit(handle.all_time_download),
            friendly_unit(handle.total_payload_download)
        )),
        up_limit: Some(friendly_limit(handle.upload_limit)),
        dl_limit: Some(friendly_limit(handle.download_limit)),
        time_elapsed: Some(time_elapsed),
        nb_connections: Some(format!(
            "{} ({} max)",
            handle.num_connections, handle.connections_limit
        )),
        share_ratio: Some(format_ratio(ratio)),
    }
}
