//! # Geekbot Infrastructure
//!
//! HTTP implementation of the Geekbot client.
//!
//! This crate contains:
//! - The async [`GeekbotClient`] and its dispatch core
//! - The [`BlockingGeekbotClient`] facade
//! - Configuration loading from environment and files
//! - Conversions from transport errors into [`geekbot_domain::GeekbotError`]
//!
//! ## Architecture
//! - Implements [`geekbot_core::StandupApi`]
//! - Depends on `geekbot-common` for rate limiting and retries
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod blocking;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{Credential, DispatchRetryPolicy, GeekbotClient};
pub use blocking::BlockingGeekbotClient;
pub use errors::InfraError;
pub use geekbot_common::observability::{init_logging, init_logging_with_level};
pub use geekbot_core::{StandupApi, StandupHelper};
pub use geekbot_domain::{ClientConfig, GeekbotError, Result, RetrySettings};
pub use http::{HttpClient, HttpClientBuilder};
