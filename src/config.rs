//! Configuration module for the relay server.
//!
//! Settings come from two places, merged once at startup:
//! 1. A TOML file (`config.local.toml` preferred, then `config.toml`) for
//!    server address, upstream base URLs, and logging. Missing file means
//!    built-in defaults.
//! 2. Environment variables for everything secret: client credentials, the
//!    OAuth redirect URL, and the allowed CORS origin. A `.env` file is
//!    honored when present.
//!
//! The resulting [`Config`] is immutable for the process lifetime; request
//! handlers never read the environment themselves.
//!
//! # Example
//! ```rust,ignore
//! let config = Config::load_default()?;
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! ```

use axum::http::HeaderValue;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
    /// Secrets are never read from the TOML file
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum accepted request body size in bytes (bounds image uploads)
    pub max_body_size: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_size: 10 * 1024 * 1024,
        }
    }
}

/// Which LinkedIn endpoint resolves the current member's id.
///
/// The two API generations return the identifier under different names:
/// the OpenID Connect userinfo document uses `sub`, the legacy profile
/// endpoint uses `id`. Selected per deployment, not auto-detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileApi {
    /// `GET /v2/userinfo`, identifier field `sub`
    #[default]
    OpenidConnect,
    /// `GET /v2/me`, identifier field `id`
    LegacyMe,
}

/// Upstream API locations
///
/// Defaults point at the production hosts; tests override these with a
/// mock server URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the Swoogo REST API
    pub swoogo_api_base: String,
    /// Base URL of the LinkedIn REST API
    pub linkedin_api_base: String,
    /// Base URL of the LinkedIn OAuth token endpoint
    pub linkedin_oauth_base: String,
    /// Which profile endpoint resolves the member id
    pub profile_api: ProfileApi,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            swoogo_api_base: "https://api.swoogo.com".to_string(),
            linkedin_api_base: "https://api.linkedin.com".to_string(),
            linkedin_oauth_base: "https://www.linkedin.com".to_string(),
            profile_api: ProfileApi::default(),
        }
    }
}

/// Credentials and per-deployment values, read from the environment
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Swoogo OAuth2 client id (`SWOOGO_CLIENT_ID`)
    pub swoogo_client_id: String,
    /// Swoogo OAuth2 client secret (`SWOOGO_CLIENT_SECRET`)
    pub swoogo_client_secret: String,
    /// LinkedIn OAuth2 client id (`LINKEDIN_CLIENT_ID`)
    pub linkedin_client_id: String,
    /// LinkedIn OAuth2 client secret (`LINKEDIN_CLIENT_SECRET`)
    pub linkedin_client_secret: String,
    /// Redirect URL registered with LinkedIn (`LINKEDIN_REDIRECT_URL`)
    pub linkedin_redirect_url: String,
    /// Origin allowed by the CORS policy (`ALLOWED_ORIGIN`)
    pub allowed_origin: String,
}

impl Credentials {
    /// Read all required values from the environment
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnv` naming the first absent variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            swoogo_client_id: require_env("SWOOGO_CLIENT_ID")?,
            swoogo_client_secret: require_env("SWOOGO_CLIENT_SECRET")?,
            linkedin_client_id: require_env("LINKEDIN_CLIENT_ID")?,
            linkedin_client_secret: require_env("LINKEDIN_CLIENT_SECRET")?,
            linkedin_redirect_url: require_env("LINKEDIN_REDIRECT_URL")?,
            allowed_origin: require_env("ALLOWED_ORIGIN")?,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file plus environment secrets
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, a
    /// required environment variable is missing, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.credentials = Credentials::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Tries `config.local.toml`, then `config.toml`. When neither exists
    /// the built-in defaults are used; environment secrets are required
    /// either way.
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new("config.local.toml").exists() {
            return Self::load("config.local.toml");
        }

        if Path::new("config.toml").exists() {
            return Self::load("config.toml");
        }

        let config = Config {
            credentials: Credentials::from_env()?,
            ..Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, base) in [
            ("swoogo_api_base", &self.upstream.swoogo_api_base),
            ("linkedin_api_base", &self.upstream.linkedin_api_base),
            ("linkedin_oauth_base", &self.upstream.linkedin_oauth_base),
        ] {
            if base.ends_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "{} should not have a trailing slash",
                    name
                )));
            }
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an absolute http(s) URL",
                    name
                )));
            }
        }

        if self.credentials.allowed_origin.parse::<HeaderValue>().is_err() {
            return Err(ConfigError::ValidationError(
                "ALLOWED_ORIGIN is not a valid header value".to_string(),
            ));
        }

        if self.server.max_body_size < 1024 {
            return Err(ConfigError::ValidationError(
                "max_body_size must be at least 1024 bytes".to_string(),
            ));
        }

        Ok(())
    }
}
