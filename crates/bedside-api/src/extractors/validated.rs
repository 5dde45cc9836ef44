//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Extracts a JSON object body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
///
/// Anything other than a JSON object (arrays, strings, numbers, `null`) is
/// rejected as an invalid body before it reaches `T`, since serde-derived
/// structs would otherwise also accept sequences.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
            _ => ApiError::invalid_body("Invalid JSON body"),
        })?;

        if !body.is_object() {
            return Err(ApiError::invalid_body("Request body must be a JSON object"));
        }

        let value: T = serde_json::from_value(body)
            .map_err(|e| ApiError::invalid_body(format!("Failed to parse request body: {e}")))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
