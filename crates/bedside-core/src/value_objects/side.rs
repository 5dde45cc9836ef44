//! Bed side - one of the two independently sensed zones

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sensor zone of the mattress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in reporting order
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a side from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid side: {0}")]
pub struct SideParseError(pub String);

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(SideParseError(s.to_string())),
        }
    }
}
