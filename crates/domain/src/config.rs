//! Client configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;

/// Configuration accepted by the API client.
///
/// Every field is optional so an empty file, or no file at all, is a valid
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host the API is served from (e.g. `https://discuit.org`). The client
    /// appends the `api/` path itself.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Configuration pointing at a specific host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()) }
    }

    /// The configured host, or the public default.
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_public_host() {
        assert_eq!(ClientConfig::default().base_url_or_default(), "https://discuit.org");
    }

    #[test]
    fn explicit_host_wins() {
        let config = ClientConfig::with_base_url("https://example.org");
        assert_eq!(config.base_url_or_default(), "https://example.org");
    }

    #[test]
    fn missing_field_deserializes_to_none() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
