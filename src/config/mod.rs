//! Configuration types for the Ecwid API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EcwidConfig`]: The configuration for a single store
//! - [`EcwidConfigBuilder`]: A builder for constructing [`EcwidConfig`] instances
//! - [`StoreId`]: A validated numeric store id
//! - [`AccessToken`]: An access token with masked debug output
//! - [`BaseUrl`]: A validated API host override
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{AccessToken, EcwidConfig, StoreId};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new("1003").unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_url(), "https://app.ecwid.com/api/v3/1003");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, StoreId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default time allowed for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Default time allowed for a complete request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Configuration for talking to one Ecwid store.
///
/// # Thread Safety
///
/// `EcwidConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct EcwidConfig {
    store_id: StoreId,
    access_token: AccessToken,
    base_url: BaseUrl,
    response_logging: bool,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl EcwidConfig {
    /// Creates a new builder for constructing an `EcwidConfig`.
    #[must_use]
    pub fn builder() -> EcwidConfigBuilder {
        EcwidConfigBuilder::new()
    }

    /// Returns the store id.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether every response is logged.
    #[must_use]
    pub const fn response_logging(&self) -> bool {
        self.response_logging
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the overall request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the root URL of the store's REST API.
    ///
    /// This is `{base_url}/api/v3/{store_id}`.
    #[must_use]
    pub fn store_url(&self) -> String {
        format!("{}/api/v3/{}", self.base_url.as_ref(), self.store_id)
    }
}

// Verify EcwidConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcwidConfig>();
};

/// Builder for constructing [`EcwidConfig`] instances.
///
/// Required fields are `store_id` and `access_token`.
///
/// # Defaults
///
/// - `base_url`: `https://app.ecwid.com`
/// - `response_logging`: `false`
/// - `connect_timeout`: 3 seconds
/// - `timeout`: 6 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EcwidConfigBuilder {
    store_id: Option<StoreId>,
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    response_logging: Option<bool>,
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl EcwidConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store id (required).
    #[must_use]
    pub fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Enables logging of every response at `info` level.
    #[must_use]
    pub const fn response_logging(mut self, enabled: bool) -> Self {
        self.response_logging = Some(enabled);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EcwidConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_id` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<EcwidConfig, ConfigError> {
        let store_id = self
            .store_id
            .ok_or(ConfigError::MissingRequiredField { field: "store_id" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(EcwidConfig {
            store_id,
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            response_logging: self.response_logging.unwrap_or(false),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_store_id() {
        let result = EcwidConfigBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_id" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = EcwidConfigBuilder::new()
            .store_id(StoreId::new("1003").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new("1003").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://app.ecwid.com");
        assert!(!config.response_logging());
        assert_eq!(config.connect_timeout(), Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(6));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_store_url_uses_base_url_override() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new("42").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.store_url(), "http://localhost:9000/api/v3/42");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new("1003").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .response_logging(true)
            .connect_timeout(Duration::from_secs(1))
            .timeout(Duration::from_secs(10))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert!(config.response_logging());
        assert_eq!(config.connect_timeout(), Duration::from_secs(1));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new("1003").unwrap())
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("EcwidConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
