//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ecwid store identifier.
///
/// Ecwid store ids are numeric. Surrounding whitespace is trimmed.
///
/// # Example
///
/// ```rust
/// use ecwid_api::StoreId;
///
/// let store = StoreId::new("1003").unwrap();
/// assert_eq!(store.as_ref(), "1003");
/// assert!(StoreId::new("my-store").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new validated store id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreId`] if the id is empty or not numeric.
    pub fn new(store_id: impl Into<String>) -> Result<Self, ConfigError> {
        let store_id = store_id.into().trim().to_string();
        if store_id.is_empty() || !store_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidStoreId { store_id });
        }
        Ok(Self(store_id))
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An OAuth access token for a single store.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use ecwid_api::AccessToken;
///
/// let token = AccessToken::new("secret_abc").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated base URL for the Ecwid API host.
///
/// The URL must use the `http` or `https` scheme and have a non-empty host.
/// Trailing slashes are removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use ecwid_api::BaseUrl;
///
/// let url = BaseUrl::new("https://app.ecwid.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://app.ecwid.com");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// The public Ecwid API host.
    pub const DEFAULT: &'static str = "https://app.ecwid.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host = url[scheme_end + 3..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_accepts_digits() {
        let store = StoreId::new(" 1003 ").unwrap();
        assert_eq!(store.as_ref(), "1003");
        assert_eq!(store.to_string(), "1003");
    }

    #[test]
    fn test_store_id_rejects_invalid_values() {
        assert!(matches!(
            StoreId::new(""),
            Err(ConfigError::InvalidStoreId { .. })
        ));
        assert!(StoreId::new("12a4").is_err());
        assert!(StoreId::new("-12").is_err());
    }

    #[test]
    fn test_store_id_serde() {
        let store: StoreId = serde_json::from_str(r#""4870020""#).unwrap();
        assert_eq!(store.as_ref(), "4870020");
        assert_eq!(serde_json::to_string(&store).unwrap(), r#""4870020""#);
        assert!(serde_json::from_str::<StoreId>(r#""abc""#).is_err());
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(AccessToken::new("   ").is_err());
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("secret_token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("secret_token"));
    }

    #[test]
    fn test_access_token_bearer_header() {
        let token = AccessToken::new("abc").unwrap();
        assert_eq!(token.bearer(), "Bearer abc");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
        assert_eq!(url.scheme(), "http");

        assert!(BaseUrl::new("app.ecwid.com").is_err());
        assert!(BaseUrl::new("ftp://app.ecwid.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
    }

    #[test]
    fn test_base_url_default() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://app.ecwid.com");
        assert_eq!(url.scheme(), "https");
    }
}
