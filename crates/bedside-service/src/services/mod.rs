//! Services

mod error;
mod presence;

pub use error::{ServiceError, ServiceResult};
pub use presence::PresenceStore;
