//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{PresenceQuery, UpdatePresenceRequest};
pub use responses::{
    format_timestamp, HealthResponse, LastUpdated, MergedPresenceView, PresenceDetails,
    PresenceSnapshot, PresenceView, UpdatePresenceResponse, ZoneView, NEVER,
};
