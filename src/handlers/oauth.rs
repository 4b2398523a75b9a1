//! LinkedIn OAuth callback handler.
//!
//! Terminal step of the authorization-code flow: the provider redirects
//! the user's browser here with a `code` query parameter, which is
//! exchanged for an access token using the configured client credentials.
//! The token is returned to the caller as JSON and never stored
//! server-side.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{AuthCallbackResponse, CallbackQuery};
use crate::state::AppState;

use super::require;

/// Exchange the authorization code for an access token
///
/// GET /auth/callback?code=...
async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<AuthCallbackResponse>> {
    let code = require(query.code.as_deref(), "Authorization code")?;

    let token_response = state
        .linkedin
        .exchange_code(code)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch token", e))?;

    // A 2xx without an access_token is still a failed exchange
    let access_token = token_response
        .get("access_token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Upstream {
            message: "Failed to fetch token".to_string(),
            details: token_response.clone(),
        })?;

    Ok(Json(AuthCallbackResponse {
        access_token,
        token_response,
    }))
}

/// Create the OAuth callback route
pub fn oauth_routes() -> Router<AppState> {
    Router::new().route("/auth/callback", get(callback))
}
