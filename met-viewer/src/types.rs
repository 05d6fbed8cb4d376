use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Range;
// Use the interfaces crate for core types
pub use interfaces::defs::{AcceptancePolicy, ArtworkRecord, ObjectId, Rejection, Verdict};
pub use interfaces::state::RequestStatus;

pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Positional slice of the catalog kept as the selection pool.
pub const DEFAULT_POOL_RANGE: Range<usize> = 200_000..250_000;

/// Draws allowed per user-initiated advance, rejections included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Body of `GET /objects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectsResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<ObjectId>>,
}

/// Body of `GET /objects/{id}`. The API sends empty strings for missing values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    #[serde(rename = "objectID", default)]
    pub object_id: Option<ObjectId>,
    #[serde(default)]
    pub primary_image_small: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display_name: Option<String>,
    #[serde(default)]
    pub object_date: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ObjectRecord {
    pub fn into_artwork(self, requested_id: ObjectId) -> ArtworkRecord {
        ArtworkRecord {
            object_id: self.object_id.unwrap_or(requested_id),
            image: non_empty(self.primary_image_small),
            department: non_empty(self.department),
            title: non_empty(self.title),
            // Blank names are kept as-is; the policy decides what blank means.
            artist_display_name: self.artist_display_name,
            object_date: non_empty(self.object_date),
        }
    }
}

/// A record together with how it was obtained.
#[derive(Debug, Clone)]
pub struct FetchedRecord {
    pub record: ArtworkRecord,
    pub fetch_time: DateTime<Utc>,
    pub response_time_ms: u64,
}

/// The artwork card currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedArtwork {
    pub object_id: ObjectId,
    pub image: String,
    pub artist: String,
    pub year: String,
    pub title: String,
    pub department: String,
    pub fetched_at: DateTime<Utc>,
    pub response_time_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
    pub pool_range: Range<usize>,
    pub max_attempts: u32,
    pub seed: Option<u64>,
    pub filter_on_start: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "Met-Viewer/1.0".to_string(),
            timeout_seconds: None,
            pool_range: DEFAULT_POOL_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            filter_on_start: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Accepted(DisplayedArtwork),
    Failed(String),
    Exhausted { attempts: u32 },
    /// Pool is empty; the Next control is disabled.
    Disabled,
    /// A newer advance started before this one finished.
    Superseded,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Response has no objectIDs")]
    MissingObjectIds,

    #[error("could not fetch object IDs: {0}")]
    PoolLoadFailure(String),

    #[error("Failed to fetch object {id}: {message}")]
    RecordFetchFailure { id: ObjectId, message: String },

    #[error("No acceptable artwork after {attempts} attempts")]
    RetryBoundExceeded { attempts: u32 },

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
