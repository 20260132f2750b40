use crate::stores::snapshot_store::SnapshotStore;
use crate::utils::time::current_timestamp;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub torrents_added: AtomicU64,
    pub torrents_updated: AtomicU64,
    pub torrents_removed: AtomicU64,
    pub unknown_states: AtomicU64,
    /// Add/update events for ids the engine no longer knows
    pub dropped_events: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct MetricsSnapshot {
    pub torrents_added: u64,
    pub torrents_updated: u64,
    pub torrents_removed: u64,
    pub unknown_states: u64,
    pub dropped_events: u64,
    pub tracked_torrents: usize,
    pub uptime_seconds: i64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            torrents_added: AtomicU64::new(0),
            torrents_updated: AtomicU64::new(0),
            torrents_removed: AtomicU64::new(0),
            unknown_states: AtomicU64::new(0),
            dropped_events: AtomicU64::new(0),
            start_time: current_timestamp(),
        }
    }

    pub fn increment_added(&self) {
        self.torrents_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.torrents_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_removed(&self) {
        self.torrents_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_unknown(&self) {
        self.unknown_states.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_dropped(&self) {
        self.dropped_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time view of the counters plus derived rates
    pub fn get_snapshot(&self, store: &SnapshotStore) -> MetricsSnapshot {
        let torrents_added = self.torrents_added.load(Ordering::Relaxed);
        let torrents_updated = self.torrents_updated.load(Ordering::Relaxed);
        let torrents_removed = self.torrents_removed.load(Ordering::Relaxed);

        let uptime_seconds = current_timestamp() - self.start_time;

        MetricsSnapshot {
            torrents_added,
            torrents_updated,
            torrents_removed,
            unknown_states: self.unknown_states.load(Ordering::Relaxed),
            dropped_events: self.dropped_events.load(Ordering::Relaxed),
            tracked_torrents: store.len(),
            uptime_seconds,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = Metrics::new();
        let snapshot = metrics.get_snapshot(&SnapshotStore::new());

        assert_eq!(snapshot.torrents_added, 0);
        assert_eq!(snapshot.torrents_updated, 0);
        assert_eq!(snapshot.torrents_removed, 0);
        assert_eq!(snapshot.tracked_torrents, 0);
        assert!(snapshot.uptime_seconds >= 0);
    }

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.increment_added();
        metrics.increment_updated();
        metrics.increment_updated();
        metrics.increment_removed();
        metrics.increment_unknown();
        metrics.increment_dropped();

        let snapshot = metrics.get_snapshot(&SnapshotStore::new());
        assert_eq!(snapshot.torrents_added, 1);
        assert_eq!(snapshot.torrents_updated, 2);
        assert_eq!(snapshot.torrents_removed, 1);
        assert_eq!(snapshot.unknown_states, 1);
        assert_eq!(snapshot.dropped_events, 1);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let snapshot = Metrics::new().get_snapshot(&SnapshotStore::new());
        let value = serde_json::to_value(&snapshot).unwrap();
        let fields = value.as_object().unwrap();

        assert_eq!(fields.len(), 7);
        assert!(fields.contains_key("tracked_torrents"));
        assert!(fields.contains_key("uptime_seconds"));
        assert!(!fields.contains_key("events_per_second"));
    }
}
