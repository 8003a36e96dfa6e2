//! Standup helpers
//!
//! `ports` declares the endpoint surface; `service` builds the convenience
//! operations (pagination, lookups, clone, pause) on top of it.

pub mod ports;
pub mod service;

pub use ports::StandupApi;
pub use service::StandupHelper;
