//! Inbound request bodies and query parameters.
//!
//! Required fields are modeled as `Option` so a missing field reaches the
//! handler, which rejects it with its own named message instead of a
//! generic deserialization error.

use serde::Deserialize;

/// Query parameters for the OAuth callback
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code handed back by the provider redirect
    pub code: Option<String>,
}

/// Query parameters for resolving the current member id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub access_token: Option<String>,
}

/// JSON body for the metadata-only upload registration variant
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
}

/// JSON body for post creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub access_token: Option<String>,
    pub text: Option<String>,
    pub asset_id: Option<String>,
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_form() {
        let request: CreatePostRequest = serde_json::from_str(
            r#"{"accessToken": "tok", "text": "hello", "assetId": "urn:li:digitalmediaAsset:1", "userId": "abc"}"#,
        )
        .unwrap();
        assert_eq!(request.access_token.as_deref(), Some("tok"));
        assert_eq!(request.asset_id.as_deref(), Some("urn:li:digitalmediaAsset:1"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let request: UploadImageRequest = serde_json::from_str(r#"{"accessToken": "tok"}"#).unwrap();
        assert!(request.user_id.is_none());
    }
}
