//! Value objects - immutable types that represent domain concepts

mod availability;
mod side;

pub use availability::{merge_availability, Availability};
pub use side::{Side, SideParseError};
