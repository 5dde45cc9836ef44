//! Presence state - both zones of the bed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::zone::ZoneReading;
use crate::error::DomainError;
use crate::value_objects::{merge_availability, Availability, Side};

/// A write to one or both zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceUpdate {
    pub left: Option<bool>,
    pub right: Option<bool>,
}

impl PresenceUpdate {
    #[must_use]
    pub const fn new(left: Option<bool>, right: Option<bool>) -> Self {
        Self { left, right }
    }

    /// Update only the left zone
    #[must_use]
    pub const fn left(present: bool) -> Self {
        Self::new(Some(present), None)
    }

    /// Update only the right zone
    #[must_use]
    pub const fn right(present: bool) -> Self {
        Self::new(None, Some(present))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Value supplied for a side, if any
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<bool> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Sides carried by this update
    pub fn sides(&self) -> impl Iterator<Item = (Side, bool)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.get(side).map(|v| (side, v)))
    }
}

/// Last known presence for both zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceState {
    pub left: ZoneReading,
    pub right: ZoneReading,
}

impl PresenceState {
    /// Both zones never updated
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: ZoneReading::never_updated(),
            right: ZoneReading::never_updated(),
        }
    }

    #[must_use]
    pub const fn zone(&self, side: Side) -> &ZoneReading {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn zone_mut(&mut self, side: Side) -> &mut ZoneReading {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Apply an update observed at `now`. Sides absent from the update are
    /// left untouched.
    pub fn apply(&mut self, update: PresenceUpdate, now: DateTime<Utc>) -> Result<(), DomainError> {
        if update.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }
        for (side, present) in update.sides() {
            self.zone_mut(side).record(present, now);
        }
        Ok(())
    }

    /// Availability of a single zone at `now`
    #[must_use]
    pub fn availability(
        &self,
        side: Side,
        now: DateTime<Utc>,
        stale_timeout: Duration,
    ) -> Availability {
        self.zone(side).availability(now, stale_timeout)
    }

    /// Bed-level presence at `now` (see [`merge_availability`])
    #[must_use]
    pub fn merged(&self, now: DateTime<Utc>, stale_timeout: Duration) -> Availability {
        merge_availability(
            self.availability(Side::Left, now, stale_timeout),
            self.availability(Side::Right, now, stale_timeout),
        )
    }
}
