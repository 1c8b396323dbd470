//! REST resource infrastructure for the Ecwid API.
//!
//! This module provides:
//!
//! - **[`Entity`]**: an attribute-backed record with dirty tracking and
//!   minimal-diff saves
//! - **[`ResourceSchema`]**: static per-type field tables mapping local names
//!   to upstream keys
//! - **[`Resource`] trait**: typed wrappers over [`Entity`]
//! - **[`PagedResponse`]**: lazy page-by-page walking of listing endpoints
//! - **`*ListParams`**: typed filters for the listing endpoints
//! - **[`ResourceError`]**: error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::{OrderListParams, Resource};
//!
//! // Walk every unpaid order, one page at a time
//! let params = OrderListParams {
//!     payment_status: Some("AWAITING_PAYMENT".to_string()),
//!     ..Default::default()
//! };
//! let mut orders = client.orders().all(params)?;
//! while let Some(order) = orders.next().await {
//!     let mut order = order?;
//!     order.set_payment_status("PAID");
//!     order.save(&client).await?;  // PUT orders/<id> with {"paymentStatus": "PAID"}
//! }
//!
//! // Update the store profile; unchanged fields are not sent
//! let mut profile = client.profile().get().await?;
//! profile.set_country_code("US");
//! profile.save(&client).await?;
//! profile.save(&client).await?;  // nothing dirty, no request
//! ```

mod entity;
mod errors;
mod paged;
mod query;
mod resource;
mod schema;

pub mod resources;

pub use entity::Entity;
pub use errors::{FieldAccess, ResourceError};
pub use paged::{
    total_pages, Listing, PageRequest, PageResult, PagedResponse, DEFAULT_PAGE_SIZE,
    DEFAULT_START_PAGE,
};
pub use query::{serialize_to_query, CategoryListParams, OrderListParams, ProductListParams};
pub use resource::Resource;
pub use schema::{FieldSpec, ResourceSchema};
