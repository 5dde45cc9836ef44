//! Seams for infrastructure the domain depends on

mod clock;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
