//! Handler tests for the Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the products domain handlers wired to the
//! in-memory repository, not the full application with routing, docs, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app_with_service() -> (axum::Router, ProductService<InMemoryProductRepository>) {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    (handlers::router(service.clone()), service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let (app, _service) = app_with_service();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Laptop",
                "description": "High-end gaming laptop",
                "price": 1500.0,
                "stockQuantity": 10
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Laptop");
    assert_eq!(product.price, 1500.0);
    assert_eq!(product.stock_quantity, 10);
    assert!(!product.id.is_nil());
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let (app, _service) = app_with_service();

    // Negative price is rejected at the boundary
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Laptop",
                "description": "",
                "price": -1.0,
                "stockQuantity": 10
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();
    assert!(body_str.contains("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_create_product_handler_rejects_malformed_json() {
    let (app, _service) = app_with_service();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_handler_returns_200() {
    let (app, service) = app_with_service();

    let input = CreateProduct {
        name: "Laptop".to_string(),
        description: "High-end gaming laptop".to_string(),
        price: 1500.0,
        stock_quantity: 10,
    };
    let created = service.create_product(input).await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, "Laptop");
    assert_eq!(product.description, "High-end gaming laptop");
    assert_eq!(product.price, 1500.0);
    assert_eq!(product.stock_quantity, 10);
}

#[tokio::test]
async fn test_get_product_handler_returns_404_for_missing() {
    let (app, _service) = app_with_service();

    let missing_id = uuid::Uuid::new_v4();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", missing_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_handler_returns_400_for_bad_uuid() {
    let (app, _service) = app_with_service();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_in_stock_handler_returns_true_for_stocked_product() {
    let (app, service) = app_with_service();

    let input = CreateProduct {
        name: "Laptop".to_string(),
        description: String::new(),
        price: 1500.0,
        stock_quantity: 10,
    };
    let created = service.create_product(input).await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}/in-stock", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let in_stock: bool = json_body(response.into_body()).await;
    assert!(in_stock);
}

#[tokio::test]
async fn test_in_stock_handler_returns_false_for_zero_stock() {
    let (app, service) = app_with_service();

    let input = CreateProduct {
        name: "Monitor".to_string(),
        description: String::new(),
        price: 300.0,
        stock_quantity: 0,
    };
    let created = service.create_product(input).await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}/in-stock", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let in_stock: bool = json_body(response.into_body()).await;
    assert!(!in_stock);
}

#[tokio::test]
async fn test_in_stock_handler_returns_404_for_missing() {
    let (app, _service) = app_with_service();

    let missing_id = uuid::Uuid::new_v4();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}/in-stock", missing_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // NotFound, never a false boolean for an unknown product
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_product_uses_camel_case_wire_format() {
    let (app, _service) = app_with_service();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Headphones",
                "price": 99.0,
                "stockQuantity": 5
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["stockQuantity"], 5);
    assert!(body.get("stock_quantity").is_none());
    // Description defaults to an empty string when omitted
    assert_eq!(body["description"], "");
}
