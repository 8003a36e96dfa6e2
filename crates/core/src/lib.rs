//! # Geekbot Core
//!
//! Client logic that does not depend on a transport.
//!
//! This crate contains:
//! - The `StandupApi` port (one method per REST endpoint)
//! - `StandupHelper`, the convenience layer built on that port
//!
//! ## Architecture Principles
//! - Only depends on `geekbot-domain`
//! - No HTTP code; the infra crate implements the port
//! - All external access via traits

pub mod helpers;

pub use helpers::{StandupApi, StandupHelper};
