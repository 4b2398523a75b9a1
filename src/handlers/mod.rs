//! HTTP request handlers for the relay server.
//!
//! This module contains all endpoint handlers organized by upstream:
//! - `events`: Swoogo token issuance and event/registrant/image lookups
//! - `oauth`: LinkedIn authorization-code callback
//! - `linkedin`: member-id resolution and the media publish sequence
//! - `health`: liveness endpoint

pub mod events;
pub mod health;
pub mod linkedin;
pub mod oauth;

pub use events::event_routes;
pub use health::health_routes;
pub use linkedin::linkedin_routes;
pub use oauth::oauth_routes;

use crate::error::{AppError, Result};

/// Reject an absent or empty optional field with its named 400 error
pub(crate) fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::missing_field(field)),
    }
}

/// Reject an empty path parameter with its named 400 error
pub(crate) fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    require(Some(value), field)
}
