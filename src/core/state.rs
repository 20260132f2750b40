// Application state (AppState)

use crate::core::config::Config;
use crate::engine::memory::MemoryEngine;
use crate::events::dispatcher::{self, TorrentEvent};
use crate::events::manager::EventManager;
use crate::metrics::collector::Metrics;
use crate::stores::snapshot_store::SnapshotStore;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared application state
///
/// Handlers read through `manager` and write by queueing events; only the
/// dispatcher task mutates the snapshot store.
#[derive(Clone)]
pub struct AppState {
    /// Raw torrent state pushed in by the session
    pub engine: Arc<MemoryEngine>,

    /// Latest snapshot per torrent
    pub store: Arc<SnapshotStore>,

    pub manager: Arc<EventManager>,

    /// Producer side of the dispatcher queue
    pub events: mpsc::Sender<TorrentEvent>,

    pub metrics: Arc<Metrics>,

    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state and the receiver the dispatcher task must drain
    pub fn new(config: Config) -> (Self, mpsc::Receiver<TorrentEvent>) {
        let config = Arc::new(config);

        let engine = Arc::new(MemoryEngine::new(config.session.queueing_enabled));
        let store = Arc::new(SnapshotStore::with_capacity(config.session.store_capacity));
        let metrics = Arc::new(Metrics::new());
        let manager = Arc::new(EventManager::new(
            engine.clone(),
            Arc::clone(&store),
            Arc::clone(&metrics),
        ));

        let (events, receiver) = dispatcher::channel(config.session.event_queue_size);

        let state = Self {
            engine,
            store,
            manager,
            events,
            metrics,
            config,
        };

        (state, receiver)
    }
}
