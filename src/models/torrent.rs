use crate::models::file::FileEntry;
use crate::models::tracker::TrackerEntry;
use serde::{Deserialize, Serialize};

/// Opaque torrent identifier (the info-hash in hex)
pub type TorrentId = String;

/// Trim an incoming torrent id; `None` when nothing is left
pub fn normalize_id(raw: &str) -> Option<TorrentId> {
    let id = raw.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Raw lifecycle stage reported by the transfer engine
///
/// A missing phase deserializes as `Unrecognized`, never as a normal stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePhase {
    QueuedForChecking,
    CheckingFiles,
    DownloadingMetadata,
    Downloading,
    Finished,
    Seeding,
    Allocating,
    CheckingResumeData,
    /// Anything the engine reports that this layer does not know about
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// Short-lived, owned view of one torrent's raw engine state
///
/// Obtained from the engine per call and never retained across calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentHandle {
    pub hash: TorrentId,
    pub name: String,
    pub save_path: Option<String>,
    /// Unix timestamp, if the metainfo carries one
    pub creation_date: Option<i64>,
    pub comment: String,

    pub phase: EnginePhase,
    pub paused: bool,
    pub queued: bool,
    pub seed: bool,
    /// Fraction in [0, 1]
    pub progress: f64,
    /// Bytes of selected files
    pub actual_size: u64,

    pub download_payload_rate: u64,
    pub upload_payload_rate: u64,
    /// Bytes per second, 0 means unlimited
    pub download_limit: u64,
    pub upload_limit: u64,

    pub total_payload_download: u64,
    pub total_payload_upload: u64,
    pub all_time_download: u64,
    pub all_time_upload: u64,
    pub total_failed_bytes: u64,
    pub total_redundant_bytes: u64,

    /// Seconds
    pub active_time: u64,
    pub seeding_time: u64,

    pub num_connections: u32,
    pub connections_limit: u32,
    /// Negative when the torrent is not in the queue
    pub queue_position: i32,

    pub num_peers: u32,
    pub num_seeds: u32,
    pub num_complete: u32,
    pub num_incomplete: u32,

    pub files: Vec<FileEntry>,
    pub trackers: Vec<TrackerEntry>,
}

impl Default for TorrentHandle {
    fn default() -> Self {
        Self {
            hash: TorrentId::new(),
            name: String::new(),
            save_path: None,
            creation_date: None,
            comment: String::new(),
            phase: EnginePhase::default(),
            paused: false,
            queued: false,
            seed: false,
            progress: 0.0,
            actual_size: 0,
            download_payload_rate: 0,
            upload_payload_rate: 0,
            download_limit: 0,
            upload_limit: 0,
            total_payload_download: 0,
            total_payload_upload: 0,
            all_time_download: 0,
            all_time_upload: 0,
            total_failed_bytes: 0,
            total_redundant_bytes: 0,
            active_time: 0,
            seeding_time: 0,
            num_connections: 0,
            connections_limit: 0,
            queue_position: -1,
            num_peers: 0,
            num_seeds: 0,
            num_complete: 0,
            num_incomplete: 0,
            files: Vec::new(),
            trackers: Vec::new(),
        }
    }
}

impl TorrentHandle {
    pub fn new(hash: impl Into<TorrentId>, name: impl Into<String>, phase: EnginePhase) -> Self {
        Self {
            hash: hash.into(),
            name: name.into(),
            phase,
            ..Default::default()
        }
    }

    /// Remaining bytes of the selected files
    pub fn bytes_left(&self) -> u64 {
        let done = (self.actual_size as f64 * self.progress.clamp(0.0, 1.0)) as u64;
        self.actual_size.saturating_sub(done)
    }
}
