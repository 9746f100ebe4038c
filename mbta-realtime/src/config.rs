//! Client configuration.
//!
//! The only required value is the API key. It can be supplied directly,
//! read from the environment, or read from a `{"key": "..."}` JSON file.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::MbtaError;

/// Default base URL for the realtime v2 API.
pub const DEFAULT_BASE_URL: &str = "http://realtime.mbta.com/developer/api/v2";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "MBTA_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "MBTA_BASE_URL";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_VAR: &str = "MBTA_TIMEOUT_SECS";

/// Configuration for the request gateway.
#[derive(Clone)]
pub struct Config {
    /// API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to the production v2 API)
    pub base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

/// Layout of the key file.
#[derive(Deserialize)]
struct KeyFile {
    key: String,
}

impl Config {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `MBTA_API_KEY`, `MBTA_BASE_URL` and
    /// `MBTA_TIMEOUT_SECS`. Only the key is required.
    pub fn from_env() -> Result<Self, MbtaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MbtaError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MbtaError::Config(format!("{API_KEY_VAR} is not set")))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MbtaError::Config(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Load the API key from a JSON file of the form `{"key": "..."}`.
    pub fn from_key_file(path: impl AsRef<Path>) -> Result<Self, MbtaError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            MbtaError::Config(format!("failed to read key file {}: {e}", path.display()))
        })?;

        let file: KeyFile = serde_json::from_str(&contents).map_err(|e| {
            MbtaError::Config(format!("failed to parse key file {}: {e}", path.display()))
        })?;

        if file.key.trim().is_empty() {
            return Err(MbtaError::Config(format!(
                "key file {} contains an empty key",
                path.display()
            )));
        }

        Ok(Self::new(file.key))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn config_builder() {
        let config = Config::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn config_defaults() {
        let config = Config::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn debug_hides_api_key() {
        let rendered = format!("{:?}", Config::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn env_requires_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, MbtaError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, MbtaError::Config(_)));
    }

    #[test]
    fn env_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://127.0.0.1:9000/v2"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v2");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn env_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_VAR));
    }

    #[test]
    fn key_file_loads_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"key": "wX9NwuHnZU2ToO7GmGR9uw"}}"#).unwrap();

        let config = Config::from_key_file(file.path()).unwrap();
        assert_eq!(config.api_key, "wX9NwuHnZU2ToO7GmGR9uw");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn key_file_missing_or_malformed() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_key_file(dir.path().join("key.json")).is_err());

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"token\": \"x\"}").unwrap();
        let err = Config::from_key_file(&path).unwrap_err();
        assert!(matches!(err, MbtaError::Config(_)));

        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{\"key\": \"\"}").unwrap();
        assert!(Config::from_key_file(&path).is_err());
    }
}
