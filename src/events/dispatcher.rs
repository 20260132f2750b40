// Ordered delivery of change notifications to the EventManager

use crate::engine::Engine;
use crate::events::manager::EventManager;
use crate::models::torrent::TorrentId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Change notification from the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TorrentEvent {
    Added(TorrentId),
    Updated(TorrentId),
    Removed(TorrentId),
}

impl TorrentEvent {
    pub fn torrent_id(&self) -> &str {
        match self {
            TorrentEvent::Added(id) | TorrentEvent::Updated(id) | TorrentEvent::Removed(id) => id,
        }
    }
}

pub fn channel(capacity: usize) -> (mpsc::Sender<TorrentEvent>, mpsc::Receiver<TorrentEvent>) {
    mpsc::channel(capacity)
}

/// Apply events one at a time, in arrival order, until every sender is gone
///
/// This task is the only writer of the snapshot store.
pub async fn run_dispatcher(manager: Arc<EventManager>, mut events: mpsc::Receiver<TorrentEvent>) {
    let mut processed: u64 = 0;

    while let Some(event) = events.recv().await {
        match &event {
            TorrentEvent::Added(id) => manager.on_added(id),
            TorrentEvent::Updated(id) => manager.on_updated(id),
            TorrentEvent::Removed(id) => manager.on_removed(id),
        }
        processed += 1;
    }

    info!(events_processed = processed, "Event dispatcher stopped");
}

pub fn spawn_dispatcher(
    manager: Arc<EventManager>,
    events: mpsc::Receiver<TorrentEvent>,
) -> JoinHandle<()> {
    tokio::spawn(run_dispatcher(manager, events))
}

/// Periodically queue an update for every torrent the engine tracks
///
/// Keeps rates and ETAs fresh for polling clients. Stops when the
/// dispatcher is gone.
pub fn spawn_refresh_task(
    engine: Arc<dyn Engine>,
    events: mpsc::Sender<TorrentEvent>,
    refresh_interval: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(refresh_interval));

        loop {
            interval.tick().await;

            let ids = engine.torrent_ids();
            debug!(torrents = ids.len(), "Refreshing snapshots");

            for id in ids {
                if events.send(TorrentEvent::Updated(id)).await.is_err() {
                    debug!("Event queue closed, stopping refresh task");
                    return;
                }
            }
        }
    })
}
