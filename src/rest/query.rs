//! Typed list parameters for the listing endpoints.
//!
//! Each `*ListParams` struct serializes to camelCase query parameters; fields
//! left as `None` are not sent. `limit` and `page` select the page size and
//! the 1-based start page of the listing.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Parameters for listing products.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    /// Full-text search over name, description and SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Only products in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    /// Only the product with this SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Only enabled (`true`) or disabled (`false`) products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Start page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    /// Search over order number, customer name and email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Payment status filter (e.g. `PAID`, `AWAITING_PAYMENT`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    /// Fulfillment status filter (e.g. `SHIPPED`, `PROCESSING`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Start page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

/// Parameters for listing categories.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListParams {
    /// Only direct children of this category. `0` lists root categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Include disabled categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_categories: Option<bool>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Start page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

/// Converts a serializable params struct into query parameters.
///
/// Nulls are dropped, arrays become comma-separated lists, and nested objects
/// are sent as JSON text.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if `params` cannot be serialized.
pub fn serialize_to_query<P: Serialize>(params: &P) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(ResourceError::InvalidParams)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
