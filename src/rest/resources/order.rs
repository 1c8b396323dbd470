//! Order resource.
//!
//! This module provides the [`Order`] resource and its [`Orders`] endpoint.
//! Only the payment and fulfillment statuses can be changed through the
//! API; the billing and shipping contacts are exposed as [`Person`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::OrderListParams;
//!
//! let params = OrderListParams {
//!     payment_status: Some("PAID".to_string()),
//!     ..Default::default()
//! };
//! let mut orders = client.orders().all(params)?;
//! while let Some(order) = orders.next().await {
//!     let mut order = order?;
//!     order.set_fulfillment_status("SHIPPED");
//!     order.save(&client).await?;
//! }
//! ```

use std::fmt::Display;

use crate::clients::{Client, Transport};
use crate::rest::resource::{readers, resource_type, writers};
use crate::rest::resources::{listing, Person};
use crate::rest::{
    serialize_to_query, FieldSpec, Listing, OrderListParams, Resource, ResourceError,
    ResourceSchema,
};

static ORDER_SCHEMA: ResourceSchema = ResourceSchema {
    root: "orders",
    id_key: Some("id"),
    fields: &[
        FieldSpec::read_only("id", "id"),
        FieldSpec::read_only("order_number", "orderNumber"),
        FieldSpec::read_only("email", "email"),
        FieldSpec::writable("payment_status", "paymentStatus"),
        FieldSpec::writable("fulfillment_status", "fulfillmentStatus"),
        FieldSpec::read_only("total", "total"),
        FieldSpec::read_only("create_date", "createDate"),
        FieldSpec::read_only("billing_person", "billingPerson"),
        FieldSpec::read_only("shipping_person", "shippingPerson"),
    ],
};

resource_type!(
    /// A store order.
    Order, ORDER_SCHEMA
);

readers!(Order {
    order_number: u64,
    email: String,
    /// Payment status (e.g. `PAID`, `AWAITING_PAYMENT`).
    payment_status: String,
    /// Fulfillment status (e.g. `PROCESSING`, `SHIPPED`).
    fulfillment_status: String,
    total: f64,
    create_date: String,
});

writers!(Order {
    payment_status: String,
    fulfillment_status: String,
});

impl Order {
    /// Returns the billing contact.
    #[must_use]
    pub fn billing_person(&self) -> Option<Person> {
        self.person("billing_person")
    }

    /// Returns the shipping contact.
    #[must_use]
    pub fn shipping_person(&self) -> Option<Person> {
        self.person("shipping_person")
    }

    fn person(&self, field: &str) -> Option<Person> {
        let value = self.read(field).ok().flatten()?;
        Person::from_value(value.clone()).ok()
    }
}

/// Endpoint for store orders.
#[derive(Debug)]
pub struct Orders<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Orders<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists orders matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for a bad `page` or `limit`.
    pub fn all(&self, params: OrderListParams) -> Result<Listing<'a, T, Order>, ResourceError> {
        listing(self.client, serialize_to_query(&params)?)
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn find(&self, id: impl Display) -> Result<Order, ResourceError> {
        Order::find(self.client, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::{test_config, ScriptedTransport};
    use serde_json::json;

    fn sample() -> Order {
        Order::from_value(json!({
            "id": 17,
            "orderNumber": 17,
            "email": "buyer@example.com",
            "paymentStatus": "AWAITING_PAYMENT",
            "fulfillmentStatus": "PROCESSING",
            "total": 42.5,
            "billingPerson": {"name": "Ada", "countryCode": "GB"},
        }))
        .unwrap()
    }

    #[test]
    fn test_readers() {
        let order = sample();
        assert_eq!(order.id(), Some("17".to_string()));
        assert_eq!(order.order_number(), Some(17));
        assert_eq!(order.total(), Some(42.5));
        assert_eq!(order.email(), Some("buyer@example.com".to_string()));
    }

    #[test]
    fn test_persons_are_wrapped() {
        let order = sample();
        let billing = order.billing_person().unwrap();
        assert_eq!(billing.name(), Some("Ada".to_string()));
        assert_eq!(billing.country_code(), Some("GB".to_string()));
        assert!(order.shipping_person().is_none());
    }

    #[test]
    fn test_statuses_are_the_only_writable_fields() {
        let mut order = sample();
        order.set_payment_status("PAID");
        assert!(order.write("email", "x@example.com").is_err());
        assert!(order.write("billing_person", json!({})).is_err());
        assert_eq!(order.changed_fields(), json!({"paymentStatus": "PAID"}));
    }

    #[tokio::test]
    async fn test_all_sends_filters() {
        let client = Client::with_transport(&test_config(), ScriptedTransport::new());
        client
            .transport()
            .push_ok(json!({"total": 1, "items": [{"id": 3, "paymentStatus": "PAID"}]}));

        let params = OrderListParams {
            payment_status: Some("PAID".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let orders = client.orders().all(params).unwrap().collect_all().await.unwrap();

        assert_eq!(orders[0].payment_status(), Some("PAID".to_string()));
        let requests = client.transport().requests();
        let query = requests[0].query.as_ref().unwrap();
        assert_eq!(query["paymentStatus"], "PAID");
        assert_eq!(query["limit"], "10");
        assert_eq!(query["offset"], "0");
    }
}
