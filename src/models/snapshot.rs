use crate::models::torrent::TorrentId;
use serde::{Serialize, Serializer};
use std::fmt;

/// UI-facing lifecycle state of a torrent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayState {
    PausedUp,
    PausedDl,
    QueuedUp,
    QueuedDl,
    Seeding,
    StalledUp,
    CheckingUp,
    CheckingDl,
    Downloading,
    StalledDl,
    /// The engine reported a phase this layer cannot classify
    Unknown,
}

impl DisplayState {
    pub fn as_str(&self) -> Option<&'static str> {
        let name = match self {
            DisplayState::PausedUp => "pausedUP",
            DisplayState::PausedDl => "pausedDL",
            DisplayState::QueuedUp => "queuedUP",
            DisplayState::QueuedDl => "queuedDL",
            DisplayState::Seeding => "seeding",
            DisplayState::StalledUp => "stalledUP",
            DisplayState::CheckingUp => "checkingUP",
            DisplayState::CheckingDl => "checkingDL",
            DisplayState::Downloading => "downloading",
            DisplayState::StalledDl => "stalledDL",
            DisplayState::Unknown => return None,
        };
        Some(name)
    }

    /// Only actively downloading torrents carry a finite ETA
    pub fn has_eta(&self) -> bool {
        matches!(self, DisplayState::Downloading | DisplayState::StalledDl)
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("unknown"))
    }
}

// Unknown goes over the wire as null
impl Serialize for DisplayState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

/// Display fields of one torrent at one instant
///
/// Field order is the serialized order. A snapshot is never patched; the
/// next update replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TorrentSnapshot {
    pub state: DisplayState,
    pub name: String,
    pub size: String,
    pub progress: f64,
    pub dlspeed: String,
    pub upspeed: String,
    pub priority: String,
    pub num_seeds: String,
    pub num_leechs: String,
    pub seed: bool,
    pub ratio: String,
    pub eta: String,
    pub hash: TorrentId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_serializes_as_name() {
        assert_eq!(serde_json::to_string(&DisplayState::StalledDl).unwrap(), "\"stalledDL\"");
        assert_eq!(serde_json::to_string(&DisplayState::PausedUp).unwrap(), "\"pausedUP\"");
    }

    #[test]
    fn test_unknown_state_serializes_as_null() {
        assert_eq!(serde_json::to_string(&DisplayState::Unknown).unwrap(), "null");
        assert_eq!(DisplayState::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_has_eta() {
        assert!(DisplayState::Downloading.has_eta());
        assert!(DisplayState::StalledDl.has_eta());
        assert!(!DisplayState::Seeding.has_eta());
        assert!(!DisplayState::QueuedDl.has_eta());
        assert!(!DisplayState::Unknown.has_eta());
    }
}
