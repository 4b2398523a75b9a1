//! LinkedIn professional-network API client.
//!
//! Covers the authorization-code exchange, member-id resolution, and the
//! three-step media publish sequence (register upload, binary PUT, UGC
//! post creation). Intermediate identifiers are returned to the caller;
//! nothing is retained between calls.

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use crate::config::{Config, ProfileApi};
use crate::models::{RegisterUploadRequest, RegisterUploadResponse, RegisteredUpload, UgcPost};
use crate::services::upstream::{Auth, UpstreamClient, UpstreamError};

/// Client for the LinkedIn REST and OAuth APIs
#[derive(Debug, Clone)]
pub struct LinkedInClient {
    upstream: UpstreamClient,
    api_base: String,
    oauth_base: String,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    profile_api: ProfileApi,
}

impl LinkedInClient {
    /// Create a new client from configuration
    pub fn new(upstream: UpstreamClient, config: &Config) -> Self {
        Self {
            upstream,
            api_base: config.upstream.linkedin_api_base.clone(),
            oauth_base: config.upstream.linkedin_oauth_base.clone(),
            client_id: config.credentials.linkedin_client_id.clone(),
            client_secret: config.credentials.linkedin_client_secret.clone(),
            redirect_url: config.credentials.linkedin_redirect_url.clone(),
            profile_api: config.upstream.profile_api,
        }
    }

    /// Exchange an authorization code for an access token
    ///
    /// Credentials travel in the form body; the token endpoint takes no
    /// Authorization header.
    pub async fn exchange_code(&self, code: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/oauth/v2/accessToken", self.oauth_base);
        self.upstream
            .post_form(
                &url,
                None,
                &[
                    ("grant_type", "authorization_code"),
                    ("code", code),
                    ("redirect_uri", &self.redirect_url),
                    ("client_id", &self.client_id),
                    ("client_secret", &self.client_secret),
                ],
            )
            .await
    }

    /// Resolve the current member's id with the configured profile endpoint
    pub async fn member_id(&self, access_token: &str) -> Result<String, UpstreamError> {
        let (url, field) = match self.profile_api {
            ProfileApi::OpenidConnect => (format!("{}/v2/userinfo", self.api_base), "sub"),
            ProfileApi::LegacyMe => (format!("{}/v2/me", self.api_base), "id"),
        };

        let body = self.upstream.get_json(&url, Auth::Bearer(access_token)).await?;

        match body.get(field) {
            Some(Value::String(id)) => Ok(id.clone()),
            Some(Value::Number(id)) => Ok(id.to_string()),
            _ => Err(UpstreamError::malformed(
                format!("profile response missing '{}' field", field),
                Some(body),
            )),
        }
    }

    /// Register a feed-share image upload for the member
    ///
    /// Returns the asset identifier and the URL the binary must be PUT to.
    pub async fn register_upload(
        &self,
        access_token: &str,
        member_id: &str,
    ) -> Result<RegisteredUpload, UpstreamError> {
        let url = format!("{}/v2/assets?action=registerUpload", self.api_base);
        let request = RegisterUploadRequest::feedshare_image(member_id);

        let body = self
            .upstream
            .post_json(&url, Auth::Bearer(access_token), &request)
            .await?;

        let parsed: RegisterUploadResponse = serde_json::from_value(body.clone())
            .map_err(|e| {
                UpstreamError::malformed(
                    format!("unexpected register-upload response: {}", e),
                    Some(body),
                )
            })?;

        debug!(asset = %parsed.value.asset, "Registered media upload");

        Ok(RegisteredUpload {
            asset: parsed.value.asset,
            upload_url: parsed.value.upload_mechanism.media_upload.upload_url,
        })
    }

    /// PUT the media binary to a previously returned upload URL
    pub async fn upload_media(
        &self,
        access_token: &str,
        upload_url: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<(), UpstreamError> {
        self.upstream
            .put_bytes(upload_url, Auth::Bearer(access_token), content_type, data)
            .await
    }

    /// Create a UGC post
    pub async fn create_post(
        &self,
        access_token: &str,
        post: &UgcPost,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/v2/ugcPosts", self.api_base);
        self.upstream
            .post_json(&url, Auth::Bearer(access_token), post)
            .await
    }
}
