//! Client constants
//!
//! Centralized location for the defaults and wire-level literals shared by
//! every layer of the client.

// Upstream API
pub const DEFAULT_BASE_URL: &str = "https://api.geekbot.com/v1";
/// Keys with this prefix are sent verbatim in the `Authorization` header.
pub const API_KEY_PREFIX: &str = "api_";

// Rate limiting (sliding one-minute window)
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;

// Retry / backoff
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("geekbot-rs/", env!("CARGO_PKG_VERSION"));

// Reports
/// Largest page the reports endpoint returns.
pub const REPORT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_USER_REPORTS_LIMIT: u32 = 30;

// Environment variables
pub const ENV_API_KEY: &str = "GEEKBOT_API_KEY";
pub const ENV_BASE_URL: &str = "GEEKBOT_BASE_URL";
pub const ENV_RATE_LIMIT: &str = "GEEKBOT_RATE_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "GEEKBOT_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "GEEKBOT_LOG_LEVEL";
