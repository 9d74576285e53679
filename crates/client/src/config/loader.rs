//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With neither, uses [`ClientConfig::default`]
//!
//! ## Environment Variables
//! - `DISCUIT_BASE_URL`: Host the client talks to (e.g. `https://discuit.org`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./discuit.json` or `./discuit.toml` (current working directory)
//! 2. `../discuit.json` or `../discuit.toml` (parent directory)
//! 3. `../../discuit.json` or `../../discuit.toml` (grandparent directory)
//! 4. Relative to executable location
//!
//! Generic names such as `config.json` are never probed; they usually belong
//! to another tool. Pass such a file to [`load_from_file`] explicitly.

use std::path::{Path, PathBuf};

use discuit_domain::{ClientConfig, DiscuitError, Result};

pub const BASE_URL_ENV: &str = "DISCUIT_BASE_URL";

/// Load configuration with automatic fallback strategy
///
/// Environment first, then a config file, then defaults. Only a config file
/// that exists but cannot be read or parsed is an error.
///
/// # Errors
/// Returns `DiscuitError::Config` if a config file was found but is invalid.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
        }
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(ClientConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DiscuitError::Config` if `DISCUIT_BASE_URL` is unset or blank.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = env_var(BASE_URL_ENV)?;
    if base_url.trim().is_empty() {
        return Err(DiscuitError::Config(format!("{} is empty", BASE_URL_ENV)));
    }

    Ok(ClientConfig::with_base_url(base_url.trim()))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `DiscuitError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DiscuitError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DiscuitError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DiscuitError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by the extension of `path`
/// (`.json` or `.toml`; no extension is read as JSON).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DiscuitError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DiscuitError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DiscuitError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("discuit.json"),
        dir.join("discuit.toml"),
        dir.join("../discuit.json"),
        dir.join("../discuit.toml"),
        dir.join("../../discuit.json"),
        dir.join("../../discuit.toml"),
    ]
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DiscuitError::Config(format!("Missing required environment variable: {}", key))
    })
}
