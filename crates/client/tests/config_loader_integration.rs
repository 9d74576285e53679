//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! building a client from it.

use std::io::Write;

use discuit_client::{config, ApiError, DiscuitClient};
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_client_from_json_file() {
    let path = write_config(r#"{ "base_url": "https://forum.example.org" }"#, "json");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load JSON config");
    let client = DiscuitClient::new(config).expect("client");

    assert_eq!(client.api_root().as_str(), "https://forum.example.org/api/");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_client_from_toml_file() {
    let path = write_config("base_url = \"https://forum.example.org/api\"\n", "toml");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load TOML config");
    let client = DiscuitClient::new(config).expect("client");

    assert_eq!(client.api_root().as_str(), "https://forum.example.org/api/");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_empty_file_uses_public_host() {
    let path = write_config("{}", "json");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");
    let client = DiscuitClient::new(config).expect("client");

    assert_eq!(client.api_root().as_str(), "https://discuit.org/api/");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let path = write_config(r#"{ "base_url": "not a url" }"#, "json");

    let config = config::load_from_file(Some(path.clone())).expect("file itself is valid");
    let err = DiscuitClient::new(config).unwrap_err();

    assert!(matches!(err, ApiError::Config(_)));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unsupported_extension_rejected() {
    let path = write_config("base_url: https://forum.example.org", "yaml");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "yaml is not a supported format");

    std::fs::remove_file(path).ok();
}
