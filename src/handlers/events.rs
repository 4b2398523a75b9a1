//! Swoogo relay handlers.
//!
//! Every handler follows the same template: check the required inputs,
//! make one upstream call, pass the upstream body through verbatim. An
//! upstream failure becomes a 500 whose `details` carry the upstream
//! error body.
//!
//! - `GET /get-token` — token issuance with the server's own credentials
//! - `GET /event/{id}`
//! - `GET /registrants/{event_id}`
//! - `GET /registrant/{id}`
//! - `GET /image/{object_type}/{id}/{image_type}`
//!
//! All but `/get-token` require `Authorization: Bearer <token>`.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::middleware::BearerToken;
use crate::state::AppState;

use super::non_empty;

/// Issue a Swoogo API token via the client-credentials grant
///
/// GET /get-token
async fn issue_token(State(state): State<AppState>) -> Result<Json<Value>> {
    let body = state
        .swoogo
        .issue_token()
        .await
        .map_err(|e| AppError::upstream("Failed to fetch token", e))?;

    Ok(Json(body))
}

/// Fetch event details
///
/// GET /event/{id}
async fn get_event(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let event_id = non_empty(&id, "Event ID")?;

    let body = state
        .swoogo
        .event(event_id, &token)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch event details", e))?;

    Ok(Json(body))
}

/// List registrants for an event
///
/// GET /registrants/{event_id}
async fn list_registrants(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(event_id): Path<String>,
) -> Result<Json<Value>> {
    let event_id = non_empty(&event_id, "Event ID")?;

    let body = state
        .swoogo
        .registrants_for_event(event_id, &token)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch registrant details", e))?;

    Ok(Json(body))
}

/// Fetch registrant details
///
/// GET /registrant/{id}
async fn get_registrant(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let registrant_id = non_empty(&id, "Registrant ID")?;

    let body = state
        .swoogo
        .registrant(registrant_id, &token)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch registrant details", e))?;

    Ok(Json(body))
}

/// Fetch image metadata for an object
///
/// GET /image/{object_type}/{id}/{image_type}
async fn get_image(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path((object_type, id, image_type)): Path<(String, String, String)>,
) -> Result<Json<Value>> {
    let object_type = non_empty(&object_type, "Object Type")?;
    let object_id = non_empty(&id, "Object ID")?;
    let image_type = non_empty(&image_type, "Image Type")?;

    let body = state
        .swoogo
        .image(object_type, object_id, image_type, &token)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch images", e))?;

    Ok(Json(body))
}

/// Create the Swoogo relay routes
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/get-token", get(issue_token))
        .route("/event/{id}", get(get_event))
        .route("/registrants/{event_id}", get(list_registrants))
        .route("/registrant/{id}", get(get_registrant))
        .route("/image/{object_type}/{id}/{image_type}", get(get_image))
}
