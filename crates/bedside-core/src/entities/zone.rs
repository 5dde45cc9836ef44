//! Zone reading - last known presence for one side of the bed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Availability;

/// Freshness of a zone at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// No write has ever been received
    NeverUpdated,
    /// Last write is within the stale timeout
    Fresh,
    /// Last write is older than the stale timeout
    Stale,
}

/// Last write received for a zone.
///
/// `present` and `last_updated_at` are only ever set together through
/// [`ZoneReading::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneReading {
    present: Option<bool>,
    last_updated_at: Option<DateTime<Utc>>,
}

impl ZoneReading {
    /// A zone that has never been written
    #[must_use]
    pub const fn never_updated() -> Self {
        Self {
            present: None,
            last_updated_at: None,
        }
    }

    #[must_use]
    pub const fn present(&self) -> Option<bool> {
        self.present
    }

    #[must_use]
    pub const fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
    }

    /// Last known value, `false` if never written
    #[must_use]
    pub fn present_or_default(&self) -> bool {
        self.present.unwrap_or(false)
    }

    /// Record a new reading observed at `now`.
    ///
    /// The timestamp never moves backwards: if `now` is earlier than the
    /// stored instant the stored instant is kept.
    pub fn record(&mut self, present: bool, now: DateTime<Utc>) {
        let at = match self.last_updated_at {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        self.present = Some(present);
        self.last_updated_at = Some(at);
    }

    /// Classify the zone at `now`
    #[must_use]
    pub fn freshness(&self, now: DateTime<Utc>, stale_timeout: Duration) -> Freshness {
        match self.last_updated_at {
            None => Freshness::NeverUpdated,
            Some(at) if now - at > stale_timeout => Freshness::Stale,
            Some(_) => Freshness::Fresh,
        }
    }

    /// Stale or never updated
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, stale_timeout: Duration) -> bool {
        self.freshness(now, stale_timeout) != Freshness::Fresh
    }

    /// The reading as a possibly-unknown value
    #[must_use]
    pub fn availability(&self, now: DateTime<Utc>, stale_timeout: Duration) -> Availability {
        match self.present {
            Some(v) if !self.is_stale(now, stale_timeout) => Availability::Known(v),
            _ => Availability::Unavailable,
        }
    }
}
