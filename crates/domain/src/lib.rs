//! # Geekbot Domain
//!
//! Domain types for the Geekbot standup API client.
//!
//! This crate contains:
//! - Standup, report and team models with their write payloads
//! - The `GeekbotError` taxonomy and `Result` alias
//! - Client configuration structures and constants
//! - Schedule formatting helpers
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything here is plain data and pure functions

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::schedule::{format_time, weekday_to_str};
