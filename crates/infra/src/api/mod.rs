//! Geekbot REST client
//!
//! [`GeekbotClient`] owns the dispatch core: credential header, sliding
//! window rate limiting, JSON encoding, status mapping and retries. The
//! endpoint methods live in one file per resource and are also exposed
//! through the [`geekbot_core::StandupApi`] port.

pub mod auth;
pub mod client;
mod port;
mod reports;
mod standups;
mod teams;

pub use auth::Credential;
pub use client::{DispatchRetryPolicy, GeekbotClient};
