//! # Ecwid API Rust Client
//!
//! A Rust client for the Ecwid REST API, providing type-safe configuration,
//! typed resources with minimal-diff saves, and lazy pagination over listing
//! endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EcwidConfig`] and [`EcwidConfigBuilder`]
//! - Validated newtypes for the store id, access token and base URL
//! - An async HTTP client that authenticates every request with the store's
//!   bearer token
//! - Response classification that treats an `updateCount` other than one as a
//!   failure, even on `200 OK`
//! - Typed resources (profile, orders, products, categories, persons) that
//!   only send the fields you changed
//! - Lazy listings that fetch one page at a time, only when you ask for more
//!
//! ## Quick Start
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
//!
//! ## Reading and Updating Resources
//!
//! ```rust,ignore
//! use ecwid_api::{Client, EcwidConfig};
//! use ecwid_api::rest::ProductListParams;
//!
//! let client = Client::new(&config);
//!
//! // Only countryCode is sent; the response must report updateCount 1
//! let mut profile = client.profile().get().await?;
//! profile.set_country_code("US");
//! profile.save(&client).await?;
//!
//! // Pages of 100 are fetched as the loop advances
//! let mut products = client.products().all(ProductListParams::default())?;
//! while let Some(product) = products.next().await {
//!     println!("{:?}", product?.name());
//! }
//! ```
//!
//! ## Raw Requests
//!
//! ```rust,ignore
//! let body = client.get("/orders/17", None).await?;
//! client.put("/orders/17", serde_json::json!({"paymentStatus": "PAID"}), None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **No retries**: Every failure surfaces to the caller of the operation
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Static schemas**: Resource field tables are fixed at compile time

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

#[doc(hidden)]
pub use paste;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, EcwidConfig, EcwidConfigBuilder, StoreId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Client, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, ResponseOutcome, Transport,
    UpdateCountError,
};

// Re-export resource types
pub use rest::resources::{Category, Order, Person, Product, Profile};
pub use rest::{Entity, PagedResponse, Resource, ResourceError};
