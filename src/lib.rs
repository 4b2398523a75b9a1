//! # API Relay Server
//!
//! A thin backend relay bridging two third-party REST APIs: the Swoogo
//! event-management platform and the LinkedIn professional-network
//! platform. Each endpoint attaches the right OAuth credentials, makes one
//! upstream call, and hands the upstream response back to the caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   HTTP Server                     │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐ │
//! │  │ Swoogo API │ │ OAuth flow │ │ LinkedIn API │ │
//! │  │   relay    │ │  callback  │ │    relay     │ │
//! │  └────────────┘ └────────────┘ └──────────────┘ │
//! ├──────────────────────────────────────────────────┤
//! │                    Services                       │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐ │
//! │  │   Swoogo   │ │  LinkedIn  │ │   Upstream   │ │
//! │  │   client   │ │   client   │ │    client    │ │
//! │  └────────────┘ └────────────┘ └──────────────┘ │
//! ├──────────────────────────────────────────────────┤
//! │             Upstream REST APIs (HTTPS)            │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! No state survives a request: tokens, asset identifiers, and upstream
//! responses all travel through, never into storage.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (credentials come from the environment)
//! cargo run --release
//!
//! # Issue a Swoogo API token
//! curl http://localhost:3000/get-token
//!
//! # Fetch an event with a caller-supplied token
//! curl -H "Authorization: Bearer <token>" http://localhost:3000/event/244694
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use middleware::BearerToken;
pub use state::AppState;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

/// Run the relay server with the given configuration.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid server address");

    let state = AppState::new(config);
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;

    info!(address = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Only the configured origin, only the methods and headers the
    // frontend actually sends
    let origin: HeaderValue = state
        .allowed_origin()
        .parse()
        .expect("allowed origin validated at startup");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let body_limit = RequestBodyLimitLayer::new(state.max_body_size() as usize + 1024);

    Router::new()
        .merge(handlers::event_routes())
        .merge(handlers::oauth_routes())
        .merge(handlers::linkedin_routes())
        .nest("/health", handlers::health_routes())
        .layer(
            ServiceBuilder::new()
                .layer(body_limit)
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
