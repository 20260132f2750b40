use serde::{Deserialize, Serialize};

/// Descriptive properties of one torrent, computed fresh per query
///
/// `Default` is the empty result returned for ids the engine no longer knows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_wasted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_uploaded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_downloaded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_connections: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_ratio: Option<String>,
}

impl GeneralInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
