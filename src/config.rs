// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for the Govee API client.

use std::time::Duration;

use crate::error::AuthError;

/// Environment variable the demo and [`ApiConfig::from_env`] read the
/// API key from.
pub const API_KEY_ENV: &str = "GOVEE_API_KEY";

/// Configuration for a [`GoveeClient`](crate::protocol::GoveeClient).
///
/// Holds the credential and connection parameters explicitly; nothing in
/// the library reads ambient global state, so tests can inject fake
/// credentials and point the client at a local mock server.
///
/// # Examples
///
/// ```
/// use govee_lib::ApiConfig;
/// use std::time::Duration;
///
/// let config = ApiConfig::new("my-api-key")
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Production endpoint of the Govee developer API.
    pub const DEFAULT_BASE_URL: &'static str = "https://developer-api.govee.com";

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the given API key and defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration from the `GOVEE_API_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingKey` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, AuthError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AuthError::MissingKey),
        }
    }

    /// Overrides the base URL. Trailing slashes are trimmed so endpoint
    /// paths can be appended directly.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ApiConfig::new("key");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.base_url(), ApiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = ApiConfig::new("key").with_base_url("http://localhost:9000/");
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test]
    fn builder_chain() {
        let config = ApiConfig::new("key")
            .with_base_url("http://localhost:9000")
            .with_timeout(Duration::from_secs(30));
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
