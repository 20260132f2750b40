use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::core::state::AppState;
use crate::events::dispatcher::TorrentEvent;
use crate::models::torrent::{normalize_id, TorrentHandle};

/// Read the raw torrent states saved by the session
pub fn load_state_file(path: &Path) -> Result<Vec<TorrentHandle>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read state file: {}", path.display()))?;

    let handles: Vec<TorrentHandle> =
        serde_json::from_str(&content).context("Failed to parse state file")?;

    Ok(handles)
}

/// Seed the engine with boot-time state and queue an `Added` event for each torrent
///
/// Hashes are trimmed the same way as notify bodies; entries without one are
/// skipped. Returns the number queued.
pub async fn seed_from_state(state: &AppState, handles: Vec<TorrentHandle>) -> Result<usize> {
    let mut queued = 0;

    for mut handle in handles {
        let Some(hash) = normalize_id(&handle.hash) else {
            warn!(name = %handle.name, "State entry without hash, skipping torrent");
            continue;
        };

        handle.hash = hash.clone();
        state.engine.upsert(handle);
        state
            .events
            .send(TorrentEvent::Added(hash))
            .await
            .context("Event queue closed while seeding state")?;
        queued += 1;
    }

    info!(
        torrents_queued = queued,
        engine_torrents = state.engine.len(),
        "Session state seeded"
    );

    Ok(queued)
}
