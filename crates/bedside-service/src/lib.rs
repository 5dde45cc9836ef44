//! # bedside-service
//!
//! Application layer: the presence store and the DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use dto::{
    format_timestamp, HealthResponse, LastUpdated, MergedPresenceView, PresenceDetails,
    PresenceQuery, PresenceSnapshot, PresenceView, UpdatePresenceRequest, UpdatePresenceResponse,
    ZoneView, NEVER,
};
pub use services::{PresenceStore, ServiceError, ServiceResult};
