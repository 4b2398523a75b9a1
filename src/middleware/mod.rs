//! Middleware components for the relay server.
//!
//! This module contains request-preprocessing pieces, currently just
//! bearer token extraction.

pub mod auth;

pub use auth::BearerToken;
