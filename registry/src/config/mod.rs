//! Registry configuration.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use std::env::VarError;
use thiserror::Error;

/// Environment variable holding the site base URL.
pub const SITE_URL_VAR: &str = "QUICKSTART_SITE_URL";

/// Default base URL of the documentation site.
pub const DEFAULT_SITE_URL: &str = "https://www.highlight.io";

/// Errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `QUICKSTART_SITE_URL` is set but blank.
    #[error("QUICKSTART_SITE_URL cannot be empty")]
    EmptySiteUrl,

    /// `QUICKSTART_SITE_URL` is set but not valid unicode.
    #[error("QUICKSTART_SITE_URL is not valid unicode")]
    NotUnicode,
}

/// Registry configuration.
///
/// Configuration values can be set via environment variables:
/// - `QUICKSTART_SITE_URL`: Base URL logo assets are resolved against
///   (default: "<https://www.highlight.io>")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Base URL of the documentation site, without a trailing slash.
    pub site_url: String,
}

impl RegistryConfig {
    /// Creates a configuration with the given site base URL.
    #[must_use]
    pub fn new(site_url: impl Into<String>) -> Self {
        let site_url: String = site_url.into();
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `QUICKSTART_SITE_URL` is set to a blank or
    /// non-unicode value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_site_url_var(std::env::var(SITE_URL_VAR))
    }

    fn from_site_url_var(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(url) if url.trim().is_empty() => Err(ConfigError::EmptySiteUrl),
            Ok(url) => Ok(Self::new(url.trim())),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    /// Resolves a site-relative asset path to an absolute URL.
    ///
    /// # Example
    ///
    /// ```
    /// use registry::config::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("https://docs.example.com/");
    /// assert_eq!(
    ///     config.site_url("/images/quickstart/go.svg"),
    ///     "https://docs.example.com/images/quickstart/go.svg"
    /// );
    /// ```
    #[must_use]
    pub fn site_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}
