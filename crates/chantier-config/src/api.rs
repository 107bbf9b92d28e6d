//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base address every request path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Check that the base URL is an absolute `http(s)` address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            }),
        }
    }
}
