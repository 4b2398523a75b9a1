//! Bearer token extraction.
//!
//! Protected routes take the caller's token from the `Authorization`
//! header and forward it upstream unchanged. Extraction is purely
//! syntactic: the header must be exactly `Bearer <token>`; nothing about
//! the token itself is validated here.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_event(
//!     BearerToken(token): BearerToken,
//!     Path(id): Path<String>,
//! ) -> Result<Json<Value>> {
//!     // token is the raw value after "Bearer "
//! }
//! ```

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::header::AUTHORIZATION;

use crate::error::AppError;

/// The bearer token presented by the caller of a protected route
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::MissingAuthHeader)?;

        let value = header.to_str().map_err(|_| AppError::MalformedAuthHeader)?;

        parse_bearer(value).map(|token| BearerToken(token.to_string()))
    }
}

/// Split on the single space character: exactly two parts, the first
/// being the literal scheme token `Bearer`.
fn parse_bearer(value: &str) -> Result<&str, AppError> {
    let parts: Vec<&str> = value.split(' ').collect();

    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::MalformedAuthHeader);
    }

    Ok(parts[1])
}
