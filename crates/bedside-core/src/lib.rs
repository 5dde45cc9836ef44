//! # bedside-core
//!
//! Domain layer for bed presence tracking: the two sensor zones, their
//! freshness rules and the policy that merges them into one signal.
//! This crate has zero dependencies on infrastructure (web framework, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Freshness, PresenceState, PresenceUpdate, ZoneReading};
pub use error::DomainError;
pub use traits::{Clock, ManualClock, SharedClock, SystemClock};
pub use value_objects::{merge_availability, Availability, Side, SideParseError};
