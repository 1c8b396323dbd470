//! HTTP transport for Ecwid API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used by default.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::Transport;
use crate::config::EcwidConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for making requests to a store's REST API.
///
/// The client handles:
/// - Base URI construction from the store id and base URL
/// - Default headers including `Authorization: Bearer <token>` and User-Agent
/// - Connect and overall request timeouts
/// - Optional logging of every response
///
/// It does not retry; every failure reaches the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use ecwid_api::{AccessToken, EcwidConfig, StoreId};
/// use ecwid_api::clients::HttpClient;
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new("1003").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// assert_eq!(client.base_uri(), "https://app.ecwid.com/api/v3/1003");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Store URL (e.g., `https://app.ecwid.com/api/v3/1003`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    response_logging: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport for the configured store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}ecwid-api v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.store_url(),
            default_headers,
            response_logging: config.response_logging(),
        }
    }

    /// Returns the store URL all paths are relative to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);
        tracing::debug!(method = %request.http_method, %url, "Sending Ecwid API request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match (request.body_type, request.body, request.raw_body) {
            (Some(body_type @ DataType::Json), Some(body), _) => {
                req_builder = req_builder
                    .header("Content-Type", body_type.as_content_type())
                    .body(body.to_string());
            }
            (Some(body_type @ DataType::OctetStream), _, Some(bytes)) => {
                req_builder = req_builder
                    .header("Content-Type", body_type.as_content_type())
                    .body(bytes);
            }
            _ => {}
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let request_url = res.url().to_string();
        let body_text = res.text().await?;

        let response = HttpResponse {
            code: status.as_u16(),
            reason: status.canonical_reason().map(String::from),
            url: request_url,
            body: HttpResponse::parse_body(&body_text),
        };

        if self.response_logging {
            tracing::info!(
                status = response.code,
                url = %response.url,
                body = %body_text,
                "Ecwid API response"
            );
        }

        Ok(response)
    }
}
