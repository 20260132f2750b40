// Lifecycle state classification
//
// The precedence contract lives in RULES: the first matching rule decides.

use crate::models::snapshot::DisplayState;
use crate::models::torrent::{EnginePhase, TorrentHandle};
use tracing::warn;

/// Raw status bits the classifier looks at
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusInput {
    pub paused: bool,
    pub queued: bool,
    /// Session-wide policy, not a per-torrent flag
    pub queueing_enabled: bool,
    pub seed: bool,
    pub upload_rate: u64,
    pub download_rate: u64,
    pub phase: EnginePhase,
}

impl StatusInput {
    pub fn from_handle(handle: &TorrentHandle, queueing_enabled: bool) -> Self {
        Self {
            paused: handle.paused,
            queued: handle.queued,
            queueing_enabled,
            seed: handle.seed,
            upload_rate: handle.upload_payload_rate,
            download_rate: handle.download_payload_rate,
            phase: handle.phase,
        }
    }
}

/// One (predicate, state) rule
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&StatusInput) -> bool,
    pub state: fn(&StatusInput) -> DisplayState,
}

/// Rules in priority order
pub const RULES: &[Rule] = &[
    Rule {
        name: "paused",
        matches: |s| s.paused,
        state: |s| if s.seed { DisplayState::PausedUp } else { DisplayState::PausedDl },
    },
    Rule {
        name: "queued",
        matches: |s| s.queueing_enabled && s.queued,
        state: |s| if s.seed { DisplayState::QueuedUp } else { DisplayState::QueuedDl },
    },
    Rule {
        name: "uploading",
        matches: |s| matches!(s.phase, EnginePhase::Finished | EnginePhase::Seeding),
        state: |s| {
            if s.upload_rate > 0 {
                DisplayState::Seeding
            } else {
                DisplayState::StalledUp
            }
        },
    },
    Rule {
        name: "checking",
        matches: |s| {
            matches!(
                s.phase,
                EnginePhase::Allocating
                    | EnginePhase::CheckingFiles
                    | EnginePhase::QueuedForChecking
                    | EnginePhase::CheckingResumeData
            )
        },
        state: |s| if s.seed { DisplayState::CheckingUp } else { DisplayState::CheckingDl },
    },
    Rule {
        name: "downloading",
        matches: |s| matches!(s.phase, EnginePhase::Downloading | EnginePhase::DownloadingMetadata),
        state: |s| {
            if s.download_rate > 0 {
                DisplayState::Downloading
            } else {
                DisplayState::StalledDl
            }
        },
    },
];

/// Classify raw status into exactly one display state
///
/// Returns `DisplayState::Unknown` (and logs) when no rule matches.
pub fn classify(input: &StatusInput) -> DisplayState {
    match RULES.iter().find(|rule| (rule.matches)(input)) {
        Some(rule) => (rule.state)(input),
        None => {
            warn!(phase = ?input.phase, "No display state for engine phase");
            DisplayState::Unknown
        }
    }
}
