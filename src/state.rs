//! Application state management.
//!
//! This module defines the shared application state that is accessible
//! from all request handlers via Axum's State extractor. Everything in it
//! is immutable after startup; handlers only read.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn handler(State(state): State<AppState>) -> impl IntoResponse {
//!     let body = state.swoogo.issue_token().await?;
//!     // ...
//! }
//! ```

use crate::config::Config;
use crate::services::{LinkedInClient, SwoogoClient, UpstreamClient};
use std::sync::Arc;

/// Shared application state
///
/// Cloned into each request handler; the clients share one underlying
/// HTTP connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Swoogo event-management API client
    pub swoogo: Arc<SwoogoClient>,

    /// LinkedIn professional-network API client
    pub linkedin: Arc<LinkedInClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        let upstream = UpstreamClient::new();
        let swoogo = SwoogoClient::new(upstream.clone(), &config);
        let linkedin = LinkedInClient::new(upstream, &config);

        Self {
            config: Arc::new(config),
            swoogo: Arc::new(swoogo),
            linkedin: Arc::new(linkedin),
        }
    }

    /// Get the origin allowed by the CORS policy
    pub fn allowed_origin(&self) -> &str {
        &self.config.credentials.allowed_origin
    }

    /// Get the maximum accepted request body size
    pub fn max_body_size(&self) -> u64 {
        self.config.server.max_body_size
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"<Config>")
            .field("swoogo", &"<SwoogoClient>")
            .field("linkedin", &"<LinkedInClient>")
            .finish()
    }
}
