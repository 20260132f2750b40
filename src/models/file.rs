use crate::utils::format::friendly_unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Raw per-file state as reported by the engine
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    /// Path relative to the torrent root
    pub path: String,
    pub size: u64,
    pub downloaded: u64,
    pub priority: i32,
}

/// Named file priority category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilePriority {
    Ignored,
    Normal,
    High,
    Maximum,
}

impl FilePriority {
    pub const IGNORED: i32 = 0;
    pub const NORMAL: i32 = 1;
    pub const HIGH: i32 = 2;
    pub const MAXIMUM: i32 = 7;

    /// Map an engine priority code, falling back to `Normal` for unknown codes
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::IGNORED => FilePriority::Ignored,
            Self::NORMAL => FilePriority::Normal,
            Self::HIGH => FilePriority::High,
            Self::MAXIMUM => FilePriority::Maximum,
            other => {
                warn!(priority = other, "Unhandled file priority, using Normal");
                FilePriority::Normal
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilePriority::Ignored => "Ignored",
            FilePriority::Normal => "Normal",
            FilePriority::High => "High",
            FilePriority::Maximum => "Maximum",
        }
    }
}

impl fmt::Display for FilePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-file row of the files query
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: String,
    pub progress: f64,
    pub priority: String,
}

impl FileInfo {
    /// Build a display row; single-file torrents are named after the torrent
    pub fn from_entry(entry: &FileEntry, torrent_name: &str, single_file: bool) -> Self {
        let name = if single_file {
            torrent_name.to_string()
        } else {
            file_name(&entry.path)
        };

        let progress = if entry.size == 0 {
            0.0
        } else {
            entry.downloaded as f64 / entry.size as f64
        };

        Self {
            name,
            size: friendly_unit(entry.size),
            progress,
            priority: FilePriority::from_code(entry.priority).to_string(),
        }
    }
}

/// Last non-empty component of a slash or backslash separated path
fn file_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .find(|part| !part.is_empty() && *part != ".")
        .unwrap_or(path)
        .to_string()
}
