//! Presence availability - a boolean that may be unknown
//!
//! Serialized as `true` / `false` when known and as the string
//! `"unavailable"` otherwise, so clients can tell "confirmed empty"
//! apart from "no fresh reading".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire sentinel for an unknown reading
pub const UNAVAILABLE: &str = "unavailable";

/// Presence as seen by a reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Availability {
    /// A fresh reading exists
    Known(bool),
    /// Never written, or the last write is stale
    #[default]
    Unavailable,
}

/// Merge two zone readings into one bed-level signal.
///
/// Unknown zones are ignored; when both are known the bed is occupied if
/// either side is. Only two unknown zones merge to `Unavailable`.
#[must_use]
pub fn merge_availability(left: Availability, right: Availability) -> Availability {
    match (left, right) {
        (Availability::Known(l), Availability::Known(r)) => Availability::Known(l || r),
        (Availability::Known(v), Availability::Unavailable)
        | (Availability::Unavailable, Availability::Known(v)) => Availability::Known(v),
        (Availability::Unavailable, Availability::Unavailable) => Availability::Unavailable,
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(v) => serializer.serialize_bool(*v),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Sentinel(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(v) => Ok(Self::Known(v)),
            Repr::Sentinel(s) if s == UNAVAILABLE => Ok(Self::Unavailable),
            Repr::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "expected boolean or \"{UNAVAILABLE}\", got \"{s}\""
            ))),
        }
    }
}
