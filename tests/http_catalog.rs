//! Integration tests for the HTTP catalog: document layout, caching, retries
//! and error classification, all against a local mock server.

use cityguide::catalog::{build_client, Catalog, CatalogError, HttpCatalog};
use cityguide::domain::mock;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog_for(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(&format!("{}/v1", server.uri()), build_client().unwrap()).unwrap()
}

#[tokio::test]
async fn test_listings_loaded_from_city_slug_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/new-york/listings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::listings()))
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let listings = catalog.listings("New York").await.unwrap();
    assert_eq!(listings, mock::listings());
    assert_eq!(catalog.cached_cities(), 1);
}

#[tokio::test]
async fn test_second_request_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/chicago/shops.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::shops()))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let first = catalog.shops("Chicago").await.unwrap();
    let second = catalog.shops("Chicago").await.unwrap();
    assert_eq!(first, second);
    // Listings of Chicago were never requested
    assert_eq!(catalog.cached_cities(), 0);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let result = catalog_for(&server).listings("Houston").await;
    assert!(matches!(result, Err(CatalogError::HttpStatus(404))));
}

#[tokio::test]
async fn test_server_error_retried_then_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let result = catalog_for(&server).listings("Phoenix").await;
    assert!(matches!(result, Err(CatalogError::HttpStatus(503))));
}

#[tokio::test]
async fn test_malformed_document_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let result = catalog_for(&server).listings("Los Angeles").await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[tokio::test]
async fn test_load_city_fails_when_either_document_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/philadelphia/listings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::listings()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/philadelphia/shops.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let catalog = Catalog::http(&format!("{}/v1", server.uri()), build_client().unwrap()).unwrap();
    let result = catalog.load_city("Philadelphia").await;
    assert!(matches!(result, Err(CatalogError::HttpStatus(404))));
}

#[tokio::test]
async fn test_mock_catalog_serves_builtin_data() {
    let catalog = Catalog::mock(std::time::Duration::ZERO);
    let data = catalog.load_city("Anywhere").await.unwrap();
    assert_eq!(data.listings.len(), mock::listings().len());
    assert_eq!(data.shops.len(), mock::shops().len());
}
