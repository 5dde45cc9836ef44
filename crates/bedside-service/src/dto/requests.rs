//! Request DTOs for API endpoints
//!
//! Side values are kept as raw JSON so a wrong type (`"left": "yes"`) is
//! reported as a validation error instead of a deserialization failure.

use std::borrow::Cow;

use bedside_core::{PresenceUpdate, Side};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::services::{ServiceError, ServiceResult};

/// Presence update request
///
/// POST /metrics/presence
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_presence_sides"))]
pub struct UpdatePresenceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Value>,
}

impl UpdatePresenceRequest {
    /// Build a request from typed values
    #[must_use]
    pub fn new(left: Option<bool>, right: Option<bool>) -> Self {
        Self {
            left: left.map(Value::Bool),
            right: right.map(Value::Bool),
        }
    }

    fn value(&self, side: Side) -> Option<&Value> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Convert into a domain update, rejecting non-boolean sides
    pub fn to_update(&self) -> ServiceResult<PresenceUpdate> {
        validate_presence_sides(self).map_err(|e| ServiceError::validation(message_of(&e)))?;

        Ok(PresenceUpdate::new(
            self.left.as_ref().and_then(Value::as_bool),
            self.right.as_ref().and_then(Value::as_bool),
        ))
    }
}

fn validate_presence_sides(request: &UpdatePresenceRequest) -> Result<(), ValidationError> {
    if request.left.is_none() && request.right.is_none() {
        return Err(ValidationError::new("missing_side").with_message(Cow::Borrowed(
            "At least one side (left or right) must be provided",
        )));
    }

    for side in Side::ALL {
        if let Some(value) = request.value(side) {
            if !value.is_boolean() {
                return Err(ValidationError::new("not_boolean")
                    .with_message(Cow::Owned(format!("{side} must be a boolean"))));
            }
        }
    }

    Ok(())
}

fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map_or_else(|| err.code.to_string(), ToString::to_string)
}

/// Query for reading presence
///
/// GET /metrics/presence?side=left|right
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresenceQuery {
    #[serde(default)]
    pub side: Option<String>,
}

impl PresenceQuery {
    /// Requested side; anything unrecognised means "both sides"
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        self.side.as_deref().and_then(|s| s.parse().ok())
    }
}
