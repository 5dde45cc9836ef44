//! Response DTOs for API endpoints
//!
//! Field names are camelCase on the wire. Timestamps are RFC 3339 UTC with
//! millisecond precision, or `"never"` for a zone that was never written.

use bedside_core::{Availability, PresenceState, Side, ZoneReading};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp placeholder for a zone that was never written
pub const NEVER: &str = "never";

/// Format an optional instant for the wire
#[must_use]
pub fn format_timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || NEVER.to_string(),
        |t| t.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

// ============================================================================
// Presence Response Types
// ============================================================================

/// Formatted view of a single zone
///
/// A stale zone still reports its last known value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    pub present: bool,
    pub is_stale: bool,
    pub last_updated_at: String,
}

impl ZoneView {
    #[must_use]
    pub fn from_reading(zone: &ZoneReading, now: DateTime<Utc>, stale_timeout: Duration) -> Self {
        Self {
            present: zone.present_or_default(),
            is_stale: zone.is_stale(now, stale_timeout),
            last_updated_at: format_timestamp(zone.last_updated_at()),
        }
    }
}

/// Per-zone availability in the merged view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceDetails {
    pub left: Availability,
    pub right: Availability,
}

/// Per-zone last write times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUpdated {
    pub left: String,
    pub right: String,
}

impl From<&PresenceState> for LastUpdated {
    fn from(state: &PresenceState) -> Self {
        Self {
            left: format_timestamp(state.left.last_updated_at()),
            right: format_timestamp(state.right.last_updated_at()),
        }
    }
}

/// Bed-level presence combining both zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPresenceView {
    /// Always `"all"`
    pub side: String,
    pub presence: Availability,
    pub details: PresenceDetails,
    pub last_updated: LastUpdated,
}

impl MergedPresenceView {
    #[must_use]
    pub fn from_state(state: &PresenceState, now: DateTime<Utc>, stale_timeout: Duration) -> Self {
        Self {
            side: "all".to_string(),
            presence: state.merged(now, stale_timeout),
            details: PresenceDetails {
                left: state.availability(Side::Left, now, stale_timeout),
                right: state.availability(Side::Right, now, stale_timeout),
            },
            last_updated: LastUpdated::from(state),
        }
    }
}

/// Result of a presence read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresenceView {
    Merged(MergedPresenceView),
    Zone(ZoneView),
}

/// Raw state echoed back after a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSnapshot {
    pub left: Option<bool>,
    pub right: Option<bool>,
    pub last_updated: LastUpdated,
}

impl From<&PresenceState> for PresenceSnapshot {
    fn from(state: &PresenceState) -> Self {
        Self {
            left: state.left.present(),
            right: state.right.present(),
            last_updated: LastUpdated::from(state),
        }
    }
}

/// Response to a successful presence write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePresenceResponse {
    pub success: bool,
    pub message: String,
    pub data: PresenceSnapshot,
}

impl UpdatePresenceResponse {
    #[must_use]
    pub fn new(state: &PresenceState) -> Self {
        Self {
            success: true,
            message: "Presence updated".to_string(),
            data: PresenceSnapshot::from(state),
        }
    }
}

// ============================================================================
// Health Response Types
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
