//! Test fixtures
//!
//! Request bodies and wire shapes used by the integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Presence endpoint path
pub const PRESENCE_PATH: &str = "/api/metrics/presence";

/// Presence write body. `None` fields are left out of the JSON.
#[derive(Debug, Default, Serialize)]
pub struct PresenceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<bool>,
}

impl PresenceBody {
    pub fn left(present: bool) -> Self {
        Self {
            left: Some(present),
            right: None,
        }
    }

    pub fn right(present: bool) -> Self {
        Self {
            left: None,
            right: Some(present),
        }
    }

    pub fn both(left: bool, right: bool) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }
}

/// Single-zone read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBody {
    pub present: bool,
    pub is_stale: bool,
    pub last_updated_at: String,
}

/// Merged read. Availability fields are a bool or `"unavailable"`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBody {
    pub side: String,
    pub presence: Value,
    pub details: SidesBody<Value>,
    pub last_updated: SidesBody<String>,
}

#[derive(Debug, Deserialize)]
pub struct SidesBody<T> {
    pub left: T,
    pub right: T,
}

/// Write acknowledgement
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub success: bool,
    pub message: String,
    pub data: SnapshotBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotBody {
    pub left: Option<bool>,
    pub right: Option<bool>,
    pub last_updated: SidesBody<String>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
