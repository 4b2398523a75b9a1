//! Media upload registration models.
//!
//! The upload endpoint accepts two body shapes, modeled as a tagged
//! variant: a JSON body that only registers the upload, and a multipart
//! form that also carries the binary to push upstream.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file received via multipart form data
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Parsed input of the upload endpoint
#[derive(Debug, Clone)]
pub enum UploadInput {
    /// Register only; the caller uploads the binary itself
    Metadata { access_token: String, user_id: String },
    /// Register and push the supplied file to the returned upload URL
    WithFile {
        access_token: String,
        user_id: String,
        file: UploadedFile,
    },
}

/// Asset handle produced by upload registration
#[derive(Debug, Clone)]
pub struct RegisteredUpload {
    /// Opaque asset identifier (`urn:li:digitalmediaAsset:...`)
    pub asset: String,
    /// Where the binary must be PUT
    pub upload_url: String,
}

// =============================================================================
// LinkedIn wire types
// =============================================================================

/// Body of `POST /v2/assets?action=registerUpload`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadRequest {
    register_upload_request: RegisterUploadSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterUploadSpec {
    recipes: Vec<String>,
    owner: String,
    service_relationships: Vec<ServiceRelationship>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceRelationship {
    relationship_type: String,
    identifier: String,
}

impl RegisterUploadRequest {
    /// Registration request for a feed-share image owned by the member
    pub fn feedshare_image(member_id: &str) -> Self {
        Self {
            register_upload_request: RegisterUploadSpec {
                recipes: vec!["urn:li:digitalmediaRecipe:feedshare-image".to_string()],
                owner: format!("urn:li:person:{}", member_id),
                service_relationships: vec![ServiceRelationship {
                    relationship_type: "OWNER".to_string(),
                    identifier: "urn:li:userGeneratedContent".to_string(),
                }],
            },
        }
    }
}

/// Relevant slice of the registration response
#[derive(Debug, Deserialize)]
pub struct RegisterUploadResponse {
    pub value: RegisterUploadValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadValue {
    pub asset: String,
    pub upload_mechanism: UploadMechanism,
}

#[derive(Debug, Deserialize)]
pub struct UploadMechanism {
    #[serde(rename = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest")]
    pub media_upload: MediaUploadHttpRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadHttpRequest {
    pub upload_url: String,
}
