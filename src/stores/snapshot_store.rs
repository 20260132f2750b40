use crate::models::snapshot::TorrentSnapshot;
use crate::models::torrent::TorrentId;
use dashmap::DashMap;
use std::sync::Arc;

/// Latest display snapshot of every tracked torrent
///
/// Values are `Arc`s swapped whole on upsert, so a concurrent reader sees
/// either the previous snapshot or the new one.
pub struct SnapshotStore {
    snapshots: DashMap<TorrentId, Arc<TorrentSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: DashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the snapshot for `id`
    pub fn upsert(&self, id: TorrentId, snapshot: TorrentSnapshot) {
        self.snapshots.insert(id, Arc::new(snapshot));
    }

    /// Hard-delete the snapshot for `id`; absent ids are a no-op
    pub fn remove(&self, id: &str) -> Option<Arc<TorrentSnapshot>> {
        self.snapshots.remove(id).map(|(_, snapshot)| snapshot)
    }

    pub fn get(&self, id: &str) -> Option<Arc<TorrentSnapshot>> {
        self.snapshots.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Every current snapshot, ordered by torrent id
    pub fn list_all(&self) -> Vec<Arc<TorrentSnapshot>> {
        let mut all: Vec<Arc<TorrentSnapshot>> = self
            .snapshots
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        all.sort_by(|a, b| a.hash.cmp(&b.hash));
        all
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snapshot::DisplayState;
    use std::thread;

    fn snapshot(hash: &str, state: DisplayState, name: &str) -> TorrentSnapshot {
        TorrentSnapshot {
            state,
            name: name.to_string(),
            size: "1.0 MiB".to_string(),
            progress: 0.5,
            dlspeed: "0 B/s".to_string(),
            upspeed: "0 B/s".to_string(),
            priority: "*".to_string(),
            num_seeds: "0".to_string(),
            num_leechs: "0".to_string(),
            seed: false,
            ratio: "1.0".to_string(),
            eta: "∞".to_string(),
            hash: hash.to_string(),
        }
    }

    #[test]
    fn test_upsert_then_list_all() {
        let store = SnapshotStore::new();
        let snap = snapshot("aa", DisplayState::StalledDl, "first");

        store.upsert("aa".to_string(), snap.clone());

        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(*all[0], snap);
    }

    #[test]
    fn test_upsert_replaces_whole_snapshot() {
        let store = SnapshotStore::new();
        store.upsert("aa".to_string(), snapshot("aa", DisplayState::StalledDl, "first"));
        store.upsert("aa".to_string(), snapshot("aa", DisplayState::Seeding, "second"));

        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].state, DisplayState::Seeding);
        assert_eq!(all[0].name, "second");
    }

    #[test]
    fn test_remove() {
        let store = SnapshotStore::new();
        store.upsert("aa".to_string(), snapshot("aa", DisplayState::StalledDl, "a"));

        assert!(store.remove("aa").is_some());
        assert!(store.get("aa").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = SnapshotStore::new();
        store.upsert("aa".to_string(), snapshot("aa", DisplayState::StalledDl, "a"));

        assert!(store.remove("zz").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_all_is_ordered_by_id() {
        let store = SnapshotStore::new();
        for hash in ["cc", "aa", "bb"] {
            store.upsert(hash.to_string(), snapshot(hash, DisplayState::Seeding, hash));
        }

        let ids: Vec<String> = store.list_all().iter().map(|s| s.hash.clone()).collect();
        assert_eq!(ids, ["aa", "bb", "cc"]);
    }

    #[test]
    fn test_readers_never_see_partial_snapshot() {
        let store = Arc::new(SnapshotStore::new());
        store.upsert("aa".to_string(), snapshot("aa", DisplayState::StalledDl, "old"));

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..1000 {
                    let (state, name) = if i % 2 == 0 {
                        (DisplayState::Seeding, "new")
                    } else {
                        (DisplayState::StalledDl, "old")
                    };
                    store.upsert("aa".to_string(), snapshot("aa", state, name));
                }
            })
        };

        for _ in 0..1000 {
            if let Some(current) = store.get("aa") {
                match current.state {
                    DisplayState::Seeding => assert_eq!(current.name, "new"),
                    _ => assert_eq!(current.name, "old"),
                }
            }
        }

        writer.join().unwrap();
        assert_eq!(store.len(), 1);
    }
}
