//! Log subscriber setup
//!
//! The verbosity comes from `GEEKBOT_LOG_LEVEL` and accepts the usual level
//! names, including the `WARNING` and `CRITICAL` spellings.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "GEEKBOT_LOG_LEVEL";

/// Parse a level name, case-insensitively.
///
/// `WARNING` maps to `WARN` and `CRITICAL`/`FATAL` to `ERROR`. Returns `None`
/// for anything unrecognised.
pub fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" | "CRITICAL" | "FATAL" => Some(Level::ERROR),
        _ => None,
    }
}

/// Level from `GEEKBOT_LOG_LEVEL`, falling back to `INFO`.
pub fn level_from_env() -> Level {
    std::env::var(LOG_LEVEL_ENV).ok().as_deref().and_then(parse_level).unwrap_or(Level::INFO)
}

/// Install a global fmt subscriber filtered at [`level_from_env`].
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is left in place.
pub fn init_logging() -> bool {
    init_logging_with_level(level_from_env())
}

/// Same as [`init_logging`] with an explicit level.
pub fn init_logging_with_level(level: Level) -> bool {
    let filter = EnvFilter::new(level.as_str().to_ascii_lowercase());
    match fmt().with_env_filter(filter).with_target(true).try_init() {
        Ok(()) => {
            tracing::debug!(level = %level, "Logging initialised");
            true
        }
        Err(_) => false,
    }
}
