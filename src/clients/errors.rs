//! HTTP-level error types for the Ecwid API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: The server answered with a non-2xx status
//! - [`UpdateCountError`]: The server answered 2xx but reported an
//!   `updateCount` other than 1
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above plus
//!   connection failures
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::clients::HttpError;
//!
//! match client.put("profile", body, None).await {
//!     Ok(body) => println!("Updated: {body}"),
//!     Err(HttpError::Response(e)) => println!("Rejected with {}: {}", e.code, e.body),
//!     Err(HttpError::Update(e)) => println!("Touched {} records", e.actual),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// The only `updateCount` value accepted as success.
pub const EXPECTED_UPDATE_COUNT: i64 = 1;

/// Error returned when a request receives a non-successful response.
///
/// The raw body is kept verbatim for diagnostics; it is not parsed further.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     reason: Some("Not Found".to_string()),
///     url: "https://app.ecwid.com/api/v3/1003/products/7".to_string(),
///     body: r#"{"errorMessage":"Product not found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().starts_with("Not Found url: "));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}url: {url}, response ({code})\n{body}", reason_prefix(.reason))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase of the status line, if known.
    pub reason: Option<String>,
    /// The URL the request was sent to.
    pub url: String,
    /// The raw response body.
    pub body: String,
}

/// Error returned when a mutation succeeded at the HTTP level but the body
/// reports it affected a number of records other than one.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::UpdateCountError;
/// use serde_json::json;
///
/// let error = UpdateCountError {
///     expected: 1,
///     actual: json!(0),
///     url: "https://app.ecwid.com/api/v3/1003/profile".to_string(),
///     body: r#"{"updateCount":0}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("expected updateCount 1, got 0"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected updateCount {expected}, got {actual}. url: {url}\n{body}")]
pub struct UpdateCountError {
    /// The update count required for success.
    pub expected: i64,
    /// The `updateCount` value the server reported.
    pub actual: Value,
    /// The URL the request was sent to.
    pub url: String,
    /// The raw response body.
    pub body: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The body type does not match the kind of body that was set.
    #[error("A {body_type} body type requires the matching body field.")]
    BodyTypeMismatch {
        /// The content type that was declared.
        body_type: &'static str,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path was empty after normalization.
    #[error("Invalid API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server rejected the request (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The server accepted a mutation but reported a wrong update count.
    #[error(transparent)]
    Update(#[from] UpdateCountError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the URL of the failed request, when the server was reached.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Response(e) => Some(&e.url),
            Self::Update(e) => Some(&e.url),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

fn reason_prefix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map_or_else(String::new, |reason| format!("{reason} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_message_includes_url_status_and_body() {
        let error = HttpResponseError {
            code: 404,
            reason: Some("Not Found".to_string()),
            url: "https://app.ecwid.com/api/v3/1/orders/5".to_string(),
            body: "{}".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Not Found url: https://app.ecwid.com/api/v3/1/orders/5, response (404)\n{}"
        );
    }

    #[test]
    fn test_http_response_error_without_reason() {
        let error = HttpResponseError {
            code: 599,
            reason: None,
            url: "https://example.com/x".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "url: https://example.com/x, response (599)\nboom"
        );
    }

    #[test]
    fn test_update_count_error_names_both_counts() {
        let error = UpdateCountError {
            expected: EXPECTED_UPDATE_COUNT,
            actual: json!(2),
            url: "https://example.com/profile".to_string(),
            body: r#"{"updateCount":2}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("expected updateCount 1, got 2"));
        assert!(message.contains("https://example.com/profile"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_http_error_exposes_url() {
        let error = HttpError::from(HttpResponseError {
            code: 500,
            reason: None,
            url: "https://example.com/a".to_string(),
            body: String::new(),
        });
        assert_eq!(error.url(), Some("https://example.com/a"));

        let error = HttpError::from(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.url(), None);
    }
}
