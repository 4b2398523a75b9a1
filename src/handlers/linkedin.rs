//! LinkedIn relay handlers.
//!
//! The media publish sequence is coordinated by the caller across three
//! endpoints; this server holds no state between them:
//!
//! 1. `GET /linkedin/user-id?accessToken=...` → `{userId}`
//! 2. `POST /linkedin/upload-image` → `{assetId[, uploadUrl]}`
//! 3. `POST /linkedin/create-post` → `{success, postResponse}`
//!
//! The upload endpoint accepts either a JSON body (registration only; the
//! caller PUTs the binary to `uploadUrl` itself) or a multipart form with
//! an `image` file, in which case the binary is pushed upstream here and
//! only `assetId` comes back.

use axum::{
    extract::{FromRequest, Multipart, Query, Request, State},
    http::header,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{
    CreatePostRequest, CreatePostResponse, UgcPost, UploadImageRequest, UploadImageResponse,
    UploadInput, UploadedFile, UserIdQuery, UserIdResponse,
};
use crate::state::AppState;

use super::require;

// =============================================================================
// Member id
// =============================================================================

/// Resolve the current member's id from an access token
///
/// GET /linkedin/user-id?accessToken=...
async fn user_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<UserIdResponse>> {
    let access_token = require(query.access_token.as_deref(), "Access token")?;

    let user_id = state
        .linkedin
        .member_id(access_token)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch user id", e))?;

    Ok(Json(UserIdResponse { user_id }))
}

// =============================================================================
// Upload registration
// =============================================================================

/// Register an image upload, optionally pushing the binary upstream
///
/// POST /linkedin/upload-image
async fn upload_image(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<UploadImageResponse>> {
    match parse_upload_input(request).await? {
        UploadInput::Metadata {
            access_token,
            user_id,
        } => {
            let registered = state
                .linkedin
                .register_upload(&access_token, &user_id)
                .await
                .map_err(|e| AppError::upstream("Failed to register image upload", e))?;

            Ok(Json(UploadImageResponse {
                asset_id: registered.asset,
                upload_url: Some(registered.upload_url),
            }))
        }
        UploadInput::WithFile {
            access_token,
            user_id,
            file,
        } => {
            let registered = state
                .linkedin
                .register_upload(&access_token, &user_id)
                .await
                .map_err(|e| AppError::upstream("Failed to register image upload", e))?;

            state
                .linkedin
                .upload_media(
                    &access_token,
                    &registered.upload_url,
                    &file.content_type,
                    file.data,
                )
                .await
                .map_err(|e| AppError::upstream("Failed to upload image", e))?;

            info!(
                asset = %registered.asset,
                filename = %file.filename,
                "Uploaded image"
            );

            Ok(Json(UploadImageResponse {
                asset_id: registered.asset,
                upload_url: None,
            }))
        }
    }
}

/// Branch on the content type into the tagged upload input
async fn parse_upload_input(request: Request) -> Result<UploadInput> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::invalid_body(e.to_string()))?;
        parse_multipart_upload(multipart).await
    } else {
        let Json(body) = Json::<UploadImageRequest>::from_request(request, &())
            .await
            .map_err(|e| AppError::invalid_body(e.to_string()))?;

        let access_token = require(body.access_token.as_deref(), "Access token")?.to_string();
        let user_id = require(body.user_id.as_deref(), "User ID")?.to_string();

        Ok(UploadInput::Metadata {
            access_token,
            user_id,
        })
    }
}

/// Extract `accessToken`, `userId`, and the `image` file from a multipart form
async fn parse_multipart_upload(mut multipart: Multipart) -> Result<UploadInput> {
    let mut access_token: Option<String> = None;
    let mut user_id: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_body(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "accessToken" => {
                access_token = Some(field.text().await.map_err(|e| {
                    AppError::invalid_body(format!("Invalid accessToken field: {}", e))
                })?);
            }
            "userId" => {
                user_id = Some(field.text().await.map_err(|e| {
                    AppError::invalid_body(format!("Invalid userId field: {}", e))
                })?);
            }
            "image" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "upload".to_string());

                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| {
                        mime_guess::from_path(&filename)
                            .first_or_octet_stream()
                            .to_string()
                    });

                let data = field.bytes().await.map_err(|e| {
                    AppError::invalid_body(format!("Failed to read image: {}", e))
                })?;

                if !data.is_empty() {
                    file = Some(UploadedFile {
                        filename,
                        content_type,
                        data,
                    });
                }
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let access_token = require(access_token.as_deref(), "Access token")?.to_string();
    let user_id = require(user_id.as_deref(), "User ID")?.to_string();
    let file = file.ok_or(AppError::MissingField("Image file"))?;

    Ok(UploadInput::WithFile {
        access_token,
        user_id,
        file,
    })
}

// =============================================================================
// Post creation
// =============================================================================

/// Publish a post referencing a registered asset
///
/// POST /linkedin/create-post
async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>> {
    let access_token = require(body.access_token.as_deref(), "Access token")?;
    let text = require(body.text.as_deref(), "Post text")?;
    let asset_id = require(body.asset_id.as_deref(), "Asset ID")?;
    let user_id = require(body.user_id.as_deref(), "User ID")?;

    let post = UgcPost::image_share(user_id, text, asset_id);

    let post_response = state
        .linkedin
        .create_post(access_token, &post)
        .await
        .map_err(|e| AppError::upstream("Failed to create post", e))?;

    Ok(Json(CreatePostResponse {
        success: true,
        post_response,
    }))
}

/// Create the LinkedIn relay routes
pub fn linkedin_routes() -> Router<AppState> {
    Router::new()
        .route("/linkedin/user-id", get(user_id))
        .route("/linkedin/upload-image", post(upload_image))
        .route("/linkedin/create-post", post(create_post))
}
