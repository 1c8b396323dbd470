//! Category resource.

use std::fmt::Display;

use crate::clients::{Client, Transport};
use crate::rest::resource::{readers, resource_type, writers};
use crate::rest::resources::listing;
use crate::rest::{
    serialize_to_query, CategoryListParams, FieldSpec, Listing, Resource, ResourceError,
    ResourceSchema,
};

static CATEGORY_SCHEMA: ResourceSchema = ResourceSchema {
    root: "categories",
    id_key: Some("id"),
    fields: &[
        FieldSpec::read_only("id", "id"),
        FieldSpec::writable("parent_id", "parentId"),
        FieldSpec::writable("name", "name"),
        FieldSpec::writable("enabled", "enabled"),
        FieldSpec::read_only("product_count", "productCount"),
    ],
};

resource_type!(
    /// A catalog category.
    Category, CATEGORY_SCHEMA
);

readers!(Category {
    /// Parent category id. Root categories have none.
    parent_id: u64,
    name: String,
    enabled: bool,
    product_count: u64,
});

writers!(Category {
    parent_id: u64,
    name: String,
    enabled: bool,
});

/// Endpoint for catalog categories.
#[derive(Debug)]
pub struct Categories<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Categories<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists categories matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for a bad `page` or `limit`.
    pub fn all(
        &self,
        params: CategoryListParams,
    ) -> Result<Listing<'a, T, Category>, ResourceError> {
        listing(self.client, serialize_to_query(&params)?)
    }

    /// Fetches one category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn find(&self, id: impl Display) -> Result<Category, ResourceError> {
        Category::find(self.client, id).await
    }
}
