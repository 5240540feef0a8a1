// ABOUTME: Integration tests for the fully assembled server router
// ABOUTME: Checks route nesting, trailing slashes, the JSON 404 fallback, request ids and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use pantry_server::server::PantryServer;
use serde_json::{json, Value};

async fn app() -> axum::Router {
    let store = common::create_test_store().await;
    PantryServer::new(common::create_test_config(), store).router()
}

#[tokio::test]
async fn test_ingredient_routes_are_nested() {
    let app = app().await;

    let response = AxumTestRequest::get("/api/ingredients/available")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::post("/api/ingredients/select")
        .json(&json!({"selectedIngredients": ["SALT", "WATER", "OIL"]}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::get("/api/ingredients").send(app).await;
    assert_eq!(response.status(), 200);
    let records: Vec<Value> = response.json();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_listing_accepts_trailing_slash() {
    let app = app().await;
    AxumTestRequest::post("/api/ingredients/select")
        .json(&json!({"selectedIngredients": ["SALT", "WATER", "OIL"]}))
        .send(app.clone())
        .await;

    let bare: Vec<Value> = AxumTestRequest::get("/api/ingredients")
        .send(app.clone())
        .await
        .json();

    let response = AxumTestRequest::get("/api/ingredients/").send(app).await;
    assert_eq!(response.status(), 200);
    let slashed: Vec<Value> = response.json();
    assert_eq!(slashed, bare);
    assert_eq!(slashed.len(), 3);
}

#[tokio::test]
async fn test_health_is_served_at_root() {
    let response = AxumTestRequest::get("/health").send(app().await).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let response = AxumTestRequest::get("/api/recipes").send(app().await).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route not found");
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let response = AxumTestRequest::get("/health").send(app().await).await;
    let generated = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "client-supplied-id")
        .send(app().await)
        .await;
    assert_eq!(response.header("x-request-id"), Some("client-supplied-id"));
}

#[tokio::test]
async fn test_cors_preflight_allows_delete() {
    let response = AxumTestRequest::options("/api/ingredients/abc")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "DELETE")
        .send(app().await)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    let methods = response.header("access-control-allow-methods").unwrap();
    assert!(methods.contains("DELETE"));
}
