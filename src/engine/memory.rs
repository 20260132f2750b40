use crate::engine::Engine;
use crate::models::torrent::{TorrentHandle, TorrentId};
use crate::status::ratio::share_ratio;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Engine backed by raw states pushed in by an external session
///
/// The binary feeds it from the state file and the notification endpoints;
/// tests use it as a fixture.
pub struct MemoryEngine {
    torrents: DashMap<TorrentId, TorrentHandle>,
    queueing_enabled: AtomicBool,
}

impl MemoryEngine {
    pub fn new(queueing_enabled: bool) -> Self {
        Self {
            torrents: DashMap::new(),
            queueing_enabled: AtomicBool::new(queueing_enabled),
        }
    }

    /// Record the latest raw state of a torrent
    pub fn upsert(&self, handle: TorrentHandle) {
        self.torrents.insert(handle.hash.clone(), handle);
    }

    pub fn remove(&self, id: &str) -> Option<TorrentHandle> {
        self.torrents.remove(id).map(|(_, handle)| handle)
    }

    pub fn set_queueing_enabled(&self, enabled: bool) {
        self.queueing_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.torrents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.torrents.is_empty()
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Engine for MemoryEngine {
    fn handle(&self, id: &str) -> Option<TorrentHandle> {
        self.torrents.get(id).map(|entry| entry.value().clone())
    }

    fn torrent_ids(&self) -> Vec<TorrentId> {
        self.torrents.iter().map(|entry| entry.key().clone()).collect()
    }

    fn is_queueing_enabled(&self) -> bool {
        self.queueing_enabled.load(Ordering::Relaxed)
    }

    /// Remaining bytes over the current download rate
    fn eta(&self, id: &str) -> Option<u64> {
        let entry = self.torrents.get(id)?;
        let handle = entry.value();
        if handle.download_payload_rate == 0 {
            return None;
        }
        Some(handle.bytes_left() / handle.download_payload_rate)
    }

    fn save_path(&self, id: &str) -> Option<String> {
        self.torrents.get(id).and_then(|entry| entry.value().save_path.clone())
    }

    fn real_ratio(&self, id: &str) -> f64 {
        match self.torrents.get(id) {
            Some(entry) => share_ratio(entry.value().all_time_upload, entry.value().all_time_download),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::torrent::EnginePhase;

    fn downloading(hash: &str, size: u64, progress: f64, rate: u64) -> TorrentHandle {
        let mut handle = TorrentHandle::new(hash, hash, EnginePhase::Downloading);
        handle.actual_size = size;
        handle.progress = progress;
        handle.download_payload_rate = rate;
        handle
    }

    #[test]
    fn test_handle_lookup() {
        let engine = MemoryEngine::new(false);
        engine.upsert(downloading("aa", 100, 0.0, 0));

        assert!(engine.handle("aa").is_some());
        assert!(engine.handle("bb").is_none());
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let engine = MemoryEngine::new(false);
        engine.upsert(downloading("aa", 100, 0.0, 0));

        assert!(engine.remove("aa").is_some());
        assert!(engine.handle("aa").is_none());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_eta_from_rate() {
        let engine = MemoryEngine::new(false);
        engine.upsert(downloading("aa", 10_000, 0.5, 100));

        assert_eq!(engine.eta("aa"), Some(50));
    }

    #[test]
    fn test_eta_unbounded_without_rate() {
        let engine = MemoryEngine::new(false);
        engine.upsert(downloading("aa", 10_000, 0.5, 0));

        assert_eq!(engine.eta("aa"), None);
        assert_eq!(engine.eta("missing"), None);
    }

    #[test]
    fn test_real_ratio_uses_all_time_counters() {
        let engine = MemoryEngine::new(false);
        let mut handle = downloading("aa", 100, 1.0, 0);
        handle.total_payload_upload = 0;
        handle.total_payload_download = 0;
        handle.all_time_upload = 300;
        handle.all_time_download = 100;
        engine.upsert(handle);

        assert_eq!(engine.real_ratio("aa"), 3.0);
    }

    #[test]
    fn test_queueing_toggle() {
        let engine = MemoryEngine::new(false);
        assert!(!engine.is_queueing_enabled());

        engine.set_queueing_enabled(true);
        assert!(engine.is_queueing_enabled());
    }

    #[test]
    fn test_torrent_ids() {
        let engine = MemoryEngine::new(false);
        engine.upsert(downloading("aa", 1, 0.0, 0));
        engine.upsert(downloading("bb", 1, 0.0, 0));

        let mut ids = engine.torrent_ids();
        ids.sort();
        assert_eq!(ids, ["aa", "bb"]);
    }
}
