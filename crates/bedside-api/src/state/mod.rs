//! Application state
//!
//! Holds the shared state for the Axum application: the presence store and
//! the configuration it was built from.

use std::sync::Arc;

use bedside_common::AppConfig;
use bedside_service::PresenceStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Presence store, exclusively owned by this state
    presence: Arc<PresenceStore>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(presence: PresenceStore, config: AppConfig) -> Self {
        Self {
            presence: Arc::new(presence),
            config: Arc::new(config),
        }
    }

    /// Get the presence store
    pub fn presence(&self) -> &PresenceStore {
        &self.presence
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("presence", &"PresenceStore")
            .field("config", &"AppConfig")
            .finish()
    }
}
