//! Presence store
//!
//! Owns the presence state for both zones of the bed. All access goes
//! through one mutex so a zone's value and timestamp always change together;
//! readers get copies, never references into the store.

use bedside_common::PresenceConfig;
use bedside_core::{DomainError, PresenceState, PresenceUpdate, SharedClock, Side};
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use crate::dto::{
    MergedPresenceView, PresenceView, UpdatePresenceRequest, UpdatePresenceResponse, ZoneView,
};

use super::error::ServiceResult;

/// In-memory presence tracker for the two bed zones
pub struct PresenceStore {
    state: Mutex<PresenceState>,
    clock: SharedClock,
    stale_timeout: Duration,
}

impl PresenceStore {
    /// Create a store reading time from `clock`
    ///
    /// The stale timeout must be strictly positive.
    pub fn with_clock(stale_timeout: Duration, clock: SharedClock) -> ServiceResult<Self> {
        if stale_timeout <= Duration::zero() {
            return Err(DomainError::InvalidStaleTimeout(stale_timeout.num_milliseconds()).into());
        }

        Ok(Self {
            state: Mutex::new(PresenceState::new()),
            clock,
            stale_timeout,
        })
    }

    /// Create a store with the configured stale timeout
    pub fn from_config(config: &PresenceConfig, clock: SharedClock) -> ServiceResult<Self> {
        Self::with_clock(config.stale_timeout(), clock)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Record new readings for the supplied sides and return the full state.
    #[instrument(skip(self))]
    pub fn update_presence(&self, update: PresenceUpdate) -> ServiceResult<PresenceState> {
        let mut state = self.state.lock();
        state.apply(update, self.now())?;
        let snapshot = *state;
        drop(state);

        info!(left = ?update.left, right = ?update.right, "Presence updated");
        Ok(snapshot)
    }

    /// Validate a raw request body and apply it.
    pub fn update_from_request(
        &self,
        request: &UpdatePresenceRequest,
    ) -> ServiceResult<UpdatePresenceResponse> {
        let update = request.to_update()?;
        let state = self.update_presence(update)?;
        Ok(UpdatePresenceResponse::new(&state))
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> PresenceState {
        *self.state.lock()
    }

    /// Formatted view of one zone
    #[must_use]
    pub fn zone_view(&self, side: Side) -> ZoneView {
        let state = self.snapshot();
        ZoneView::from_reading(state.zone(side), self.now(), self.stale_timeout)
    }

    /// Merged bed-level view
    #[must_use]
    pub fn merged_view(&self) -> MergedPresenceView {
        let state = self.snapshot();
        MergedPresenceView::from_state(&state, self.now(), self.stale_timeout)
    }

    /// Read presence for one side, or the merged view when `side` is `None`.
    #[instrument(skip(self))]
    pub fn get_presence(&self, side: Option<Side>) -> PresenceView {
        let view = match side {
            Some(side) => PresenceView::Zone(self.zone_view(side)),
            None => PresenceView::Merged(self.merged_view()),
        };
        debug!(?view, "Presence read");
        view
    }
}

impl std::fmt::Debug for PresenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceStore")
            .field("state", &*self.state.lock())
            .field("stale_timeout", &self.stale_timeout)
            .finish_non_exhaustive()
    }
}
