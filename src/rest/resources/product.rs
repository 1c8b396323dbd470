//! Product resource.
//!
//! This module provides the [`Product`] resource and its [`Products`]
//! endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::{ProductListParams, Resource};
//! use ecwid_api::rest::resources::Product;
//!
//! let mut product = Product::blank();
//! product.set_name("Green tea").set_price(4.5).set_enabled(true);
//! product.create(&client).await?;
//! println!("Created product {:?}", product.id());
//! ```

use std::fmt::Display;

use crate::clients::{Client, Transport};
use crate::rest::resource::{readers, resource_type, writers};
use crate::rest::resources::listing;
use crate::rest::{
    serialize_to_query, FieldSpec, Listing, ProductListParams, Resource, ResourceError,
    ResourceSchema,
};

static PRODUCT_SCHEMA: ResourceSchema = ResourceSchema {
    root: "products",
    id_key: Some("id"),
    fields: &[
        FieldSpec::read_only("id", "id"),
        FieldSpec::writable("sku", "sku"),
        FieldSpec::writable("name", "name"),
        FieldSpec::writable("price", "price"),
        FieldSpec::writable("enabled", "enabled"),
        FieldSpec::writable("quantity", "quantity"),
        FieldSpec::writable("description", "description"),
        FieldSpec::read_only("category_ids", "categoryIds"),
    ],
};

resource_type!(
    /// A catalog product.
    Product, PRODUCT_SCHEMA
);

readers!(Product {
    sku: String,
    name: String,
    price: f64,
    enabled: bool,
    /// Units in stock. Absent for products with unlimited stock.
    quantity: i64,
    /// HTML description.
    description: String,
    category_ids: Vec<u64>,
});

writers!(Product {
    sku: String,
    name: String,
    price: f64,
    enabled: bool,
    quantity: i64,
    description: String,
});

/// Endpoint for catalog products.
#[derive(Debug)]
pub struct Products<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Products<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists products matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for a bad `page` or `limit`.
    pub fn all(
        &self,
        params: ProductListParams,
    ) -> Result<Listing<'a, T, Product>, ResourceError> {
        listing(self.client, serialize_to_query(&params)?)
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn find(&self, id: impl Display) -> Result<Product, ResourceError> {
        Product::find(self.client, id).await
    }
}
