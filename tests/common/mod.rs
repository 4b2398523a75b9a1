//! Common test utilities and helpers.

use api_relay_server::{
    config::{Config, Credentials, ProfileApi},
    create_router, AppState,
};
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance
///
/// Runs the real router on an ephemeral port; upstream base URLs all point
/// at the caller's mock server.
pub struct TestServer {
    pub base_url: String,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Start a test server with every upstream pointed at `upstream_base`
    pub async fn start(upstream_base: &str) -> Self {
        Self::start_with_profile_api(upstream_base, ProfileApi::OpenidConnect).await
    }

    /// Start a test server with an explicit profile API selection
    pub async fn start_with_profile_api(upstream_base: &str, profile_api: ProfileApi) -> Self {
        let config = create_test_config(upstream_base, profile_api);
        let state = AppState::new(config);
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            tokio::select! {
                _ = axum::serve(listener, app) => {}
                _ = shutdown_rx => {}
            }
        });

        Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get HTTP client
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap()
    }

    /// Build a URL on the test server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Test credentials; the Basic header for these is
/// `Basic c3ctY2xpZW50OnN3LXNlY3JldA==`
pub fn test_credentials() -> Credentials {
    Credentials {
        swoogo_client_id: "sw-client".to_string(),
        swoogo_client_secret: "sw-secret".to_string(),
        linkedin_client_id: "li-client".to_string(),
        linkedin_client_secret: "li-secret".to_string(),
        linkedin_redirect_url: "https://relay.test/auth/callback".to_string(),
        allowed_origin: "https://app.test".to_string(),
    }
}

/// Create test configuration with all upstreams pointed at one base URL
pub fn create_test_config(upstream_base: &str, profile_api: ProfileApi) -> Config {
    let mut config = Config::default();
    config.upstream.swoogo_api_base = upstream_base.to_string();
    config.upstream.linkedin_api_base = upstream_base.to_string();
    config.upstream.linkedin_oauth_base = upstream_base.to_string();
    config.upstream.profile_api = profile_api;
    config.credentials = test_credentials();
    config
}
