//! Outbound response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response for `GET /linkedin/user-id`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdResponse {
    pub user_id: String,
}

/// Response for `POST /linkedin/upload-image`
///
/// `uploadUrl` is returned only in the metadata-only variant, where the
/// caller performs the binary upload itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}

/// Response for `POST /linkedin/create-post`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub success: bool,
    pub post_response: Value,
}

/// Response for `GET /auth/callback`
///
/// The token stays in the response body; redirecting with the token in a
/// query string would expose it to browser history and Referer headers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackResponse {
    pub access_token: String,
    /// Raw token-endpoint response, passed through for the caller
    pub token_response: Value,
}
