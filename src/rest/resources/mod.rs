//! Ecwid resource implementations.
//!
//! Each resource wraps an [`Entity`](crate::rest::Entity) with a static field
//! table and typed accessors. Resources with their own listing endpoint also
//! have an endpoint type, reached through the [`Client`]:
//!
//! | Resource     | Root         | Endpoint        | Writable fields                               |
//! |--------------|--------------|-----------------|-----------------------------------------------|
//! | [`Profile`]  | `profile`    | [`ProfileApi`]  | all                                           |
//! | [`Order`]    | `orders`     | [`Orders`]      | payment and fulfillment status                |
//! | [`Product`]  | `products`   | [`Products`]    | sku, name, price, enabled, quantity, description |
//! | [`Category`] | `categories` | [`Categories`]  | parent id, name, enabled                      |
//! | [`Person`]   | `persons`    | via [`Order`]   | country code                                  |
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::ProductListParams;
//!
//! let product = client.products().find(123).await?;
//! println!("{:?} costs {:?}", product.name(), product.price());
//!
//! let params = ProductListParams {
//!     enabled: Some(true),
//!     ..Default::default()
//! };
//! let enabled = client.products().all(params)?.collect_all().await?;
//! ```

mod category;
mod order;
mod person;
mod product;
mod profile;

use std::collections::HashMap;

use crate::clients::{Client, Transport};
use crate::rest::{Listing, Resource, ResourceError};

pub use category::{Categories, Category};
pub use order::{Order, Orders};
pub use person::Person;
pub use product::{Product, Products};
pub use profile::{Profile, ProfileApi};

/// Builds a listing over a resource's root that maps items into `R`.
pub(crate) fn listing<T: Transport, R: Resource>(
    client: &Client<T>,
    filters: HashMap<String, String>,
) -> Result<Listing<'_, T, R>, ResourceError> {
    client.get_all(R::schema().root, filters, R::from_attributes as fn(_) -> R)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_accessors_declared<R: Resource>(readers: &[&str], setters: &[&str]) {
        let schema = R::schema();
        for field in readers {
            assert!(
                schema.field(field).is_some(),
                "{}::{field} reads an undeclared field",
                R::NAME
            );
        }
        for field in setters {
            assert!(
                schema.writable_field(field).is_some(),
                "{}::set_{field} targets a field that is not writable",
                R::NAME
            );
        }
    }

    #[test]
    fn test_every_accessor_matches_its_schema() {
        assert_accessors_declared::<Profile>(Profile::READER_FIELDS, Profile::SETTER_FIELDS);
        assert_accessors_declared::<Order>(Order::READER_FIELDS, Order::SETTER_FIELDS);
        assert_accessors_declared::<Product>(Product::READER_FIELDS, Product::SETTER_FIELDS);
        assert_accessors_declared::<Category>(Category::READER_FIELDS, Category::SETTER_FIELDS);
        assert_accessors_declared::<Person>(Person::READER_FIELDS, Person::SETTER_FIELDS);
    }
}
