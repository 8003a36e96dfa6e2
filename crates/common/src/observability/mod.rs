//! Observability setup
//!
//! Everything in the workspace logs through `tracing`; this module only
//! decides where those events go and at which level.

pub mod logging;

pub use logging::{init_logging, init_logging_with_level, level_from_env, parse_level, LOG_LEVEL_ENV};
