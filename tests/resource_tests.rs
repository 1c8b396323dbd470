//! Integration tests for typed resources.
//!
//! These tests verify that resources only send the fields that were written,
//! keep their changes when the server does not confirm an update, and use
//! the right paths for find, create, update and delete.

use ecwid_api::{
    AccessToken, BaseUrl, Client, EcwidConfig, Product, Resource, ResourceError, StoreId,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> EcwidConfig {
    EcwidConfig::builder()
        .store_id(StoreId::new("1003").unwrap())
        .access_token(AccessToken::new("secret_token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v3/1003/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Lyon",
            "countryCode": "FR",
            "currency": "EUR"
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_save_sends_only_country_code_once() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    Mock::given(method("PUT"))
        .and(path("/api/v3/1003/profile"))
        .and(body_json(json!({"countryCode": "US"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updateCount": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let mut profile = client.profile().get().await.unwrap();
    assert_eq!(profile.code(), Some("FR".to_string()));

    profile.set_country_code("US");
    assert_eq!(profile.country_code(), Some("US".to_string()));
    profile.save(&client).await.unwrap();
    assert!(!profile.is_dirty());

    // Nothing dirty: the PUT mock's expectation of one call must still hold
    profile.save(&client).await.unwrap();
}

#[tokio::test]
async fn test_profile_save_with_zero_update_count_keeps_changes() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updateCount": 0})))
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let mut profile = client.profile().get().await.unwrap();
    profile.set_city("Paris");

    let error = profile.save(&client).await.unwrap_err();

    assert!(error.is_semantic_failure());
    assert!(profile.is_dirty());
    assert_eq!(profile.city(), Some("Paris".to_string()));
}

#[tokio::test]
async fn test_update_count_two_is_semantic_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/1003/orders/17"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 17, "fulfillmentStatus": "PROCESSING"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/1003/orders/17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updateCount": 2})))
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let mut order = client.orders().find(17).await.unwrap();
    order.set_fulfillment_status("SHIPPED");

    let error = order.save(&client).await.unwrap_err();

    assert!(error.is_semantic_failure());
    assert!(!error.is_http_failure());
    assert!(error.to_string().contains("orders/17"));
    assert_eq!(
        order.dirty_fields().collect::<Vec<_>>(),
        vec!["fulfillment_status"]
    );
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_product_create_then_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/1003/products"))
        .and(body_json(json!({"name": "Green tea", "price": 4.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 501})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/1003/products/501"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleteCount": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let mut product = Product::blank();
    product.set_name("Green tea").set_price(4.5);
    product.create(&client).await.unwrap();

    assert_eq!(product.id(), Some("501".to_string()));
    product.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_find_missing_product_is_http_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/1003/products/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Product not found"))
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let error = client.products().find(404).await.unwrap_err();

    assert!(matches!(error, ResourceError::Http(_)));
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Product not found"));
}

#[tokio::test]
async fn test_order_persons() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/1003/orders/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "billingPerson": {"name": "Ada", "city": "London"},
            "shippingPerson": {"name": "Grace", "countryCode": "US"}
        })))
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let order = client.orders().find(9).await.unwrap();

    assert_eq!(
        order.billing_person().unwrap().city(),
        Some("London".to_string())
    );
    assert_eq!(
        order.shipping_person().unwrap().country_code(),
        Some("US".to_string())
    );
}
