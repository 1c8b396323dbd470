//! Integration tests for lazy listings.
//!
//! A mock server plays the Ecwid listing contract
//! (`{"total": N, "items": [...]}` selected by `limit`/`offset`) and the tests
//! check which pages are requested and what the caller receives.

use std::collections::HashMap;

use ecwid_api::rest::ProductListParams;
use ecwid_api::{AccessToken, BaseUrl, Client, EcwidConfig, ResourceError, StoreId};
use futures::StreamExt;
use serde_json::{json, Map, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> EcwidConfig {
    EcwidConfig::builder()
        .store_id(StoreId::new("1003").unwrap())
        .access_token(AccessToken::new("secret_token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn listing_body(total: u64, ids: std::ops::Range<u64>) -> Value {
    let items: Vec<Value> = ids
        .map(|id| json!({"id": id, "name": format!("Product {id}")}))
        .collect();
    json!({"total": total, "count": items.len(), "items": items})
}

async fn mount_page(server: &MockServer, offset: u64, limit: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v3/1003/products"))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn raw_id(raw: Map<String, Value>) -> u64 {
    raw["id"].as_u64().unwrap()
}

#[tokio::test]
async fn test_250_items_in_pages_of_100() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 100, listing_body(250, 0..100)).await;
    mount_page(&server, 100, 100, listing_body(250, 100..200)).await;
    mount_page(&server, 200, 100, listing_body(250, 200..250)).await;

    let client = Client::new(&create_config(&server));
    let mut listing = client.get_all("products", HashMap::new(), raw_id).unwrap();

    let mut ids = Vec::new();
    while let Some(id) = listing.next().await {
        ids.push(id.unwrap());
    }

    assert_eq!(ids, (0..250).collect::<Vec<_>>());
    assert_eq!(listing.total_pages(), Some(3));
    assert_eq!(listing.pages_fetched(), 3);
}

#[tokio::test]
async fn test_empty_listing_makes_one_request() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 100, listing_body(0, 0..0)).await;

    let client = Client::new(&create_config(&server));
    let products = client
        .products()
        .all(ProductListParams::default())
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_not_found_mid_walk_stops_the_listing() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 2, listing_body(6, 0..2)).await;

    Mock::given(method("GET"))
        .and(path("/api/v3/1003/products"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&create_config(&server));
    let params = ProductListParams {
        limit: Some(2),
        ..Default::default()
    };
    let mut products = client.products().all(params).unwrap();

    let first = products.next().await.unwrap().unwrap();
    let second = products.next().await.unwrap().unwrap();
    assert_eq!(first.name(), Some("Product 0".to_string()));
    assert_eq!(second.name(), Some("Product 1".to_string()));

    let error = products.next().await.unwrap().unwrap_err();
    assert!(error.is_http_failure());
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Not Found"));

    assert!(products.next().await.is_none());
}

#[tokio::test]
async fn test_stream_maps_products() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 3, listing_body(5, 0..3)).await;
    mount_page(&server, 3, 3, listing_body(5, 3..5)).await;

    let client = Client::new(&create_config(&server));
    let params = ProductListParams {
        limit: Some(3),
        ..Default::default()
    };
    let names: Vec<String> = client
        .products()
        .all(params)
        .unwrap()
        .into_stream()
        .map(|product| product.unwrap().name().unwrap())
        .collect()
        .await;

    assert_eq!(
        names,
        vec!["Product 0", "Product 1", "Product 2", "Product 3", "Product 4"]
    );
}

#[tokio::test]
async fn test_nothing_is_requested_before_the_first_pull() {
    let server = MockServer::start().await;

    let client = Client::new(&create_config(&server));
    let listing = client.get_all("products", HashMap::new(), raw_id).unwrap();
    drop(listing);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_huge_typed_page_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    let client = Client::new(&create_config(&server));
    let params = ProductListParams {
        page: Some(u64::MAX),
        ..Default::default()
    };
    let result = client.products().all(params);

    assert!(matches!(
        result,
        Err(ResourceError::InvalidPagination { name: "page", .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
