//! Swoogo event-management API client.
//!
//! Thin wrappers over the REST endpoints the relay exposes: token issuance
//! via client credentials, then event, registrant, and image lookups using
//! the caller's bearer token. Responses are passed through verbatim.

use serde_json::Value;

use crate::config::Config;
use crate::services::upstream::{Auth, UpstreamClient, UpstreamError};

/// Client for the Swoogo REST API
#[derive(Debug, Clone)]
pub struct SwoogoClient {
    upstream: UpstreamClient,
    base: String,
    client_id: String,
    client_secret: String,
}

impl SwoogoClient {
    /// Create a new client from configuration
    pub fn new(upstream: UpstreamClient, config: &Config) -> Self {
        Self {
            upstream,
            base: config.upstream.swoogo_api_base.clone(),
            client_id: config.credentials.swoogo_client_id.clone(),
            client_secret: config.credentials.swoogo_client_secret.clone(),
        }
    }

    /// Issue an API token via the client-credentials grant
    ///
    /// Basic-auth POST with a url-encoded `grant_type=client_credentials`
    /// body, per the Swoogo OAuth2 contract.
    pub async fn issue_token(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/api/v1/oauth2/token.json", self.base);
        let auth = Auth::Basic {
            id: &self.client_id,
            secret: &self.client_secret,
        };
        self.upstream
            .post_form(&url, Some(auth), &[("grant_type", "client_credentials")])
            .await
    }

    /// Fetch one event by id
    pub async fn event(&self, event_id: &str, token: &str) -> Result<Value, UpstreamError> {
        self.upstream
            .get_json(&self.event_url(event_id), Auth::Bearer(token))
            .await
    }

    /// List registrants for an event
    pub async fn registrants_for_event(
        &self,
        event_id: &str,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        self.upstream
            .get_json(&self.registrants_url(event_id), Auth::Bearer(token))
            .await
    }

    /// Fetch one registrant by id
    pub async fn registrant(&self, registrant_id: &str, token: &str) -> Result<Value, UpstreamError> {
        self.upstream
            .get_json(&self.registrant_url(registrant_id), Auth::Bearer(token))
            .await
    }

    /// Fetch image metadata for an object
    pub async fn image(
        &self,
        object_type: &str,
        object_id: &str,
        image_type: &str,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        self.upstream
            .get_json(
                &self.image_url(object_type, object_id, image_type),
                Auth::Bearer(token),
            )
            .await
    }

    fn event_url(&self, event_id: &str) -> String {
        format!("{}/api/v1/events/{}.json", self.base, event_id)
    }

    fn registrants_url(&self, event_id: &str) -> String {
        format!("{}/api/v1/registrants.json?event_id={}", self.base, event_id)
    }

    fn registrant_url(&self, registrant_id: &str) -> String {
        format!("{}/api/v1/registrants/{}.json", self.base, registrant_id)
    }

    fn image_url(&self, object_type: &str, object_id: &str, image_type: &str) -> String {
        format!(
            "{}/api/v1/image/{}/{}/{}.json",
            self.base, object_type, object_id, image_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn test_client() -> SwoogoClient {
        let config = Config {
            credentials: Credentials {
                swoogo_client_id: "sw-id".to_string(),
                swoogo_client_secret: "sw-secret".to_string(),
                ..Credentials::default()
            },
            ..Config::default()
        };
        SwoogoClient::new(UpstreamClient::new(), &config)
    }

    #[test]
    fn test_url_construction() {
        let client = test_client();
        assert_eq!(
            client.event_url("244694"),
            "https://api.swoogo.com/api/v1/events/244694.json"
        );
        assert_eq!(
            client.registrants_url("244694"),
            "https://api.swoogo.com/api/v1/registrants.json?event_id=244694"
        );
        assert_eq!(
            client.registrant_url("26361060"),
            "https://api.swoogo.com/api/v1/registrants/26361060.json"
        );
        assert_eq!(
            client.image_url("registrant", "26361060", "headshot"),
            "https://api.swoogo.com/api/v1/image/registrant/26361060/headshot.json"
        );
    }
}
