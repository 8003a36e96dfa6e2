//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `GEEKBOT_API_KEY` is missing, falls back to a config file
//! 3. Probes a fixed list of paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `GEEKBOT_API_KEY`: API key (required)
//! - `GEEKBOT_BASE_URL`: Base URL override
//! - `GEEKBOT_RATE_LIMIT`: Requests per minute
//! - `GEEKBOT_TIMEOUT_SECS`: Per-request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order), relative to the
//! current working directory:
//! 1. `./geekbot.toml`, `./geekbot.json`
//! 2. `./config.toml`, `./config.json`

use std::path::{Path, PathBuf};

use geekbot_domain::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_RATE_LIMIT, ENV_TIMEOUT_SECS};
use geekbot_domain::{ClientConfig, GeekbotError, Result};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] = ["geekbot.toml", "geekbot.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// When `GEEKBOT_API_KEY` is set the environment is authoritative and any
/// parse or validation error is returned as is. Only an absent key falls
/// back to loading from a config file.
///
/// # Errors
/// Returns `GeekbotError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration does not validate
pub fn load() -> Result<ClientConfig> {
    if optional_env(ENV_API_KEY).is_none() {
        tracing::debug!(var = ENV_API_KEY, "API key not set in environment, trying config file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `GEEKBOT_API_KEY` is required; everything else falls back to the
/// defaults.
///
/// # Errors
/// Returns `GeekbotError::Config` if the key is missing or a value does not
/// parse.
pub fn load_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::new(env_var(ENV_API_KEY)?);

    if let Some(base_url) = optional_env(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(raw) = optional_env(ENV_RATE_LIMIT) {
        config.rate_limit_per_minute = raw.parse::<u32>().map_err(|e| {
            GeekbotError::Config(format!("Invalid {ENV_RATE_LIMIT} '{raw}': {e}"))
        })?;
    }
    if let Some(raw) = optional_env(ENV_TIMEOUT_SECS) {
        config.timeout_secs = raw.parse::<u64>().map_err(|e| {
            GeekbotError::Config(format!("Invalid {ENV_TIMEOUT_SECS} '{raw}': {e}"))
        })?;
    }

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Missing fields take
/// their defaults.
///
/// # Errors
/// Returns `GeekbotError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration does not validate
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GeekbotError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GeekbotError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GeekbotError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GeekbotError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GeekbotError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(GeekbotError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the current working directory.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

fn probe_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Structural checks plus a parse of the base URL.
pub fn validate(config: &ClientConfig) -> Result<()> {
    config.validate()?;
    Url::parse(&config.base_url)
        .map_err(|e| GeekbotError::Config(format!("Invalid base_url '{}': {e}", config.base_url)))?;
    Ok(())
}

fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        GeekbotError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-blank, trimmed.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
