//! Gateway configuration.

use url::Url;

use super::GatewayError;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "TIJARA_API_URL";

/// Fallback base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Configuration of the gateway client, resolved once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base address of the backend REST API.
    pub base_url: Url,
}

impl GatewayConfig {
    /// Resolves the base URL from `TIJARA_API_URL`, falling back to the
    /// local default.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] if the resolved value is
    /// not a valid URL.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Resolves a configuration from an optional override value.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] if the value does not
    /// parse as a URL.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, GatewayError> {
        let raw = override_url.unwrap_or(DEFAULT_API_URL);
        let base_url =
            Url::parse(raw).map_err(|e| GatewayError::InvalidBaseUrl(format!("{e}: {raw}")))?;
        Ok(Self { base_url })
    }
}
