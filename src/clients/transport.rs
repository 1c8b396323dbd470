//! The seam between the client and the HTTP stack.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends requests to a store's REST API.
///
/// A transport attaches authentication, performs the exchange, and hands back
/// every completed response regardless of status. It returns `Err` only when
/// no response was obtained (invalid request, connection failure, timeout).
///
/// [`HttpClient`](crate::clients::HttpClient) is the built-in implementation.
/// Alternative adapters plug in through
/// [`Client::with_transport`](crate::clients::Client::with_transport).
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
/// use serde_json::json;
///
/// struct Offline;
///
/// impl Transport for Offline {
///     async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(503, request.path, json!({})))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] when the request fails validation
    /// and [`HttpError::Network`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
