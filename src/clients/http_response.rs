//! HTTP response type returned by a [`Transport`](crate::clients::Transport).

use serde_json::Value;

/// A completed HTTP exchange with the Ecwid API.
///
/// Every status code is represented here; deciding whether the response is
/// a failure is the job of [`ResponseOutcome`](crate::clients::ResponseOutcome).
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, "https://app.ecwid.com/api/v3/1/profile", json!({}));
/// assert!(response.is_ok());
/// assert_eq!(response.reason.as_deref(), Some("OK"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase for the status code, if known.
    pub reason: Option<String>,
    /// The URL the request was sent to.
    pub url: String,
    /// The parsed response body.
    ///
    /// Empty bodies become `{}`; bodies that are not JSON are kept as a
    /// JSON string holding the raw text.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response, filling in the canonical reason phrase for `code`.
    #[must_use]
    pub fn new(code: u16, url: impl Into<String>, body: Value) -> Self {
        let reason = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(String::from);

        Self {
            code,
            reason,
            url: url.into(),
            body,
        }
    }

    /// Parses a raw body the way the client stores it.
    #[must_use]
    pub fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Object(serde_json::Map::new());
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Renders a parsed body back to text, for diagnostics.
    ///
    /// Bodies kept as raw strings come back verbatim.
    #[must_use]
    pub fn render_body(body: &Value) -> String {
        match body {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, "u", json!({})).is_ok());
        assert!(HttpResponse::new(204, "u", json!({})).is_ok());
        assert!(!HttpResponse::new(302, "u", json!({})).is_ok());
        assert!(!HttpResponse::new(404, "u", json!({})).is_ok());
        assert!(!HttpResponse::new(500, "u", json!({})).is_ok());
    }

    #[test]
    fn test_new_fills_reason_phrase() {
        let response = HttpResponse::new(404, "u", json!({}));
        assert_eq!(response.reason.as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(HttpResponse::parse_body(""), json!({}));
        assert_eq!(
            HttpResponse::parse_body(r#"{"updateCount":1}"#),
            json!({"updateCount": 1})
        );
        assert_eq!(
            HttpResponse::parse_body("<html>oops</html>"),
            json!("<html>oops</html>")
        );
    }

    #[test]
    fn test_render_body_keeps_raw_strings() {
        assert_eq!(HttpResponse::render_body(&json!("Bad Gateway")), "Bad Gateway");
        assert_eq!(
            HttpResponse::render_body(&json!({"errorMessage": "nope"})),
            r#"{"errorMessage":"nope"}"#
        );
    }
}
