use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw tracker entry as reported by the engine
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerEntry {
    pub url: String,
    pub verified: bool,
    /// `None` when the engine cannot tell whether an announce is in flight
    pub updating: Option<bool>,
    pub fails: u32,
    pub num_peers: u32,
    /// Last message received from the tracker, usually an error
    pub last_message: String,
}

/// Display status of one tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerStatus {
    Working,
    Updating,
    NotWorking,
    NotContacted,
}

impl TrackerStatus {
    /// Classify a tracker entry
    ///
    /// Verified wins over everything, then an in-flight announce with no
    /// failures, then any failure. Otherwise the tracker was never contacted.
    pub fn classify(entry: &TrackerEntry) -> Self {
        if entry.verified {
            TrackerStatus::Working
        } else if entry.updating == Some(true) && entry.fails == 0 {
            TrackerStatus::Updating
        } else if entry.fails > 0 {
            TrackerStatus::NotWorking
        } else {
            TrackerStatus::NotContacted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerStatus::Working => "Working",
            TrackerStatus::Updating => "Updating...",
            TrackerStatus::NotWorking => "Not working",
            TrackerStatus::NotContacted => "Not contacted yet",
        }
    }
}

impl fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tracker row of the trackers query
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerInfo {
    pub url: String,
    pub status: String,
    pub num_peers: String,
    pub msg: String,
}

impl From<&TrackerEntry> for TrackerInfo {
    fn from(entry: &TrackerEntry) -> Self {
        Self {
            url: entry.url.clone(),
            status: TrackerStatus::classify(entry).to_string(),
            num_peers: entry.num_peers.to_string(),
            msg: entry.last_message.trim().to_string(),
        }
    }
}
