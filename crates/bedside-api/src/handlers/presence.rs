//! Presence handlers
//!
//! Endpoints for recording and reading bed presence.

use axum::{
    extract::{Query, State},
    Json,
};
use bedside_service::{PresenceQuery, PresenceView, UpdatePresenceRequest, UpdatePresenceResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Record presence for one or both sides
///
/// POST /api/metrics/presence
pub async fn update_presence(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdatePresenceRequest>,
) -> ApiResult<Json<UpdatePresenceResponse>> {
    let response = state.presence().update_from_request(&request)?;
    Ok(Json(response))
}

/// Read presence for one side, or the merged view
///
/// GET /api/metrics/presence?side=left|right
///
/// A malformed or unrecognised `side` falls back to the merged view.
pub async fn get_presence(
    State(state): State<AppState>,
    query: Option<Query<PresenceQuery>>,
) -> Json<PresenceView> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Json(state.presence().get_presence(query.side()))
}
