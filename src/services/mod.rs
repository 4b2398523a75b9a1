//! Service layer for the relay server.
//!
//! This module contains the upstream-facing clients:
//! - Generic single-attempt HTTP call wrapper
//! - Swoogo event-management API client
//! - LinkedIn professional-network API client

pub mod linkedin;
pub mod swoogo;
pub mod upstream;

pub use linkedin::LinkedInClient;
pub use swoogo::SwoogoClient;
pub use upstream::{Auth, UpstreamClient, UpstreamError};
