pub mod memory;

use crate::models::torrent::{TorrentHandle, TorrentId};

/// Query interface of the transfer engine
///
/// Handles are owned views resolved per call. Implementations must release
/// any internal locks before returning them.
pub trait Engine: Send + Sync {
    /// Resolve an id to a live handle, `None` when the id is no longer valid
    fn handle(&self, id: &str) -> Option<TorrentHandle>;

    /// Ids of every torrent the session currently tracks
    fn torrent_ids(&self) -> Vec<TorrentId>;

    /// Session-wide queueing policy
    fn is_queueing_enabled(&self) -> bool;

    /// Estimated seconds until completion, `None` when undeterminable
    fn eta(&self, id: &str) -> Option<u64>;

    fn save_path(&self, id: &str) -> Option<String>;

    /// Ratio over all sessions, bounded like the display ratio
    fn real_ratio(&self, id: &str) -> f64;
}
