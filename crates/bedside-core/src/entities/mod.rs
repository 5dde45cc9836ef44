//! Domain entities - the presence state and its zones

mod presence;
mod zone;

pub use presence::{PresenceState, PresenceUpdate};
pub use zone::{Freshness, ZoneReading};
