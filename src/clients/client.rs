//! Store client for the Ecwid REST API.
//!
//! This module provides the [`Client`] type: the per-store entry point that
//! sends requests through a [`Transport`], classifies every response, and
//! hands out the resource endpoints.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
    ResponseOutcome, Transport,
};
use crate::config::EcwidConfig;
use crate::rest::resources::{Categories, Orders, Products, ProfileApi};
use crate::rest::{PageRequest, PageResult, PagedResponse, ResourceError};

/// Client for a single Ecwid store.
///
/// Provides `get`, `post`, `put`, `delete` and `post_image` for raw access, `get_all` for
/// lazy page-by-page listings, and typed endpoints for profile, orders,
/// products and categories.
///
/// Every response passes through [`ResponseOutcome::interpret`]; a 2xx
/// response whose body reports an `updateCount` other than one is returned as
/// [`HttpError::Update`].
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::{AccessToken, Client, EcwidConfig, StoreId};
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new("1003").unwrap())
///     .access_token(AccessToken::new("secret_token").unwrap())
///     .build()?;
///
/// let client = Client::new(&config);
///
/// let profile = client.profile().get().await?;
/// println!("Store: {:?}", profile.company());
///
/// let mut products = client.products().all(Default::default())?;
/// while let Some(product) = products.next().await {
///     println!("{:?}", product?.name());
/// }
/// ```
#[derive(Debug)]
pub struct Client<T = HttpClient> {
    config: EcwidConfig,
    transport: T,
}

impl Client<HttpClient> {
    /// Creates a client that talks to Ecwid over HTTPS.
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        Self {
            config: config.clone(),
            transport: HttpClient::new(config),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends requests through the given transport.
    #[must_use]
    pub fn with_transport(config: &EcwidConfig, transport: T) -> Self {
        Self {
            config: config.clone(),
            transport,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &EcwidConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the root URL of the store's REST API.
    #[must_use]
    pub fn store_url(&self) -> String {
        self.config.store_url()
    }

    /// Sends a GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses,
    /// [`HttpError::InvalidRequest`] for an empty path, and
    /// [`HttpError::Network`] when the server could not be reached.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus [`HttpError::Update`] when the response
    /// reports an `updateCount` other than one.
    pub async fn post(
        &self,
        path: &str,
        body: Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(Payload::Json(body)), query)
            .await
    }

    /// Uploads image bytes with a POST request.
    ///
    /// The bytes are sent unchanged as `application/octet-stream`, the way
    /// Ecwid's image endpoints (e.g. `products/{id}/image`) expect them. The
    /// response is checked like any other mutation.
    ///
    /// # Errors
    ///
    /// As [`post`](Self::post).
    pub async fn post_image(
        &self,
        path: &str,
        image: impl Into<Vec<u8>>,
    ) -> Result<Value, HttpError> {
        let payload = Payload::Binary(image.into());
        self.make_request(HttpMethod::Post, path, Some(payload), None)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// As [`post`](Self::post).
    pub async fn put(
        &self,
        path: &str,
        body: Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(Payload::Json(body)), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// As [`post`](Self::post).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Returns a lazy listing over a paginated endpoint.
    ///
    /// `filters` may carry `page` (1-based start page) and `limit` (page
    /// size); every other entry is passed through as a query parameter.
    /// `mapper` turns each raw item into the caller's type.
    ///
    /// Nothing is requested until the listing is first pulled.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] when `page` or `limit`
    /// are not positive integers, or when `page` is so large that its offset
    /// overflows.
    pub fn get_all<F, R>(
        &self,
        path: &str,
        filters: HashMap<String, String>,
        mapper: F,
    ) -> Result<PagedResponse<'_, T, F>, ResourceError>
    where
        F: FnMut(Map<String, Value>) -> R,
    {
        PagedResponse::new(self, path, filters, mapper)
    }

    /// Fetches a single page of a listing.
    ///
    /// `page` and `limit` in `filters` select the page, as for
    /// [`get_all`](Self::get_all).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for bad paging filters,
    /// [`ResourceError::MalformedResponse`] if the body is not a listing, and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn paginate_get(
        &self,
        path: &str,
        filters: HashMap<String, String>,
    ) -> Result<PageResult, ResourceError> {
        let request = PageRequest::from_filters(filters)?;
        self.fetch_page(path, &request).await
    }

    pub(crate) async fn fetch_page(
        &self,
        path: &str,
        request: &PageRequest,
    ) -> Result<PageResult, ResourceError> {
        let body = self.get(path, Some(request.query()?)).await?;
        PageResult::from_body(path, &body, request)
    }

    /// Returns the store profile endpoint.
    #[must_use]
    pub const fn profile(&self) -> ProfileApi<'_, T> {
        ProfileApi::new(self)
    }

    /// Returns the orders endpoint.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_, T> {
        Orders::new(self)
    }

    /// Returns the products endpoint.
    #[must_use]
    pub const fn products(&self) -> Products<'_, T> {
        Products::new(self)
    }

    /// Returns the categories endpoint.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_, T> {
        Categories::new(self)
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        let path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, path);
        match payload {
            Some(Payload::Json(body)) => builder = builder.body(body).body_type(DataType::Json),
            Some(Payload::Binary(bytes)) => {
                builder = builder.raw_body(bytes).body_type(DataType::OctetStream);
            }
            None => {}
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build()?;

        let response = self.transport.send(request).await?;
        ResponseOutcome::interpret(response).into_result()
    }
}

enum Payload {
    Json(Value),
    Binary(Vec<u8>),
}

/// Strips leading slashes so paths can be given as `/products` or `products`.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let normalized = path.trim().trim_start_matches('/');
    if normalized.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(normalized.to_string())
}
