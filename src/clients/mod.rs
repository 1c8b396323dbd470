//! HTTP client types for Ecwid API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The per-store client used by every resource endpoint
//! - [`Transport`]: The seam for swapping the HTTP stack
//! - [`HttpClient`]: The built-in reqwest transport
//! - [`HttpRequest`] / [`HttpResponse`]: One request and its completed response
//! - [`ResponseOutcome`]: Classification of a response as success, HTTP
//!   failure, or update-count failure
//! - [`HttpError`]: Unified error type for the layer
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::{AccessToken, Client, EcwidConfig, StoreId};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new("1003").unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()?;
//!
//! let client = Client::new(&config);
//! let body = client.get("/products", None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed call surfaces to the caller immediately; callers that want
//! retries wrap the call themselves.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod outcome;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use client::Client;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, UpdateCountError,
    EXPECTED_UPDATE_COUNT,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use outcome::{ResponseOutcome, UPDATE_COUNT_KEY};
pub use transport::Transport;
