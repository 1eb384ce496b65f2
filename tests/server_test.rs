//! HTTP surface tests: welcome, health and the GraphiQL explorer.

mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::TestHarness;
use holonet::config::Config;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn root_returns_welcome() {
    let h = TestHarness::new();
    let (status, body) = h.send(get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("/graphql"));
    assert_eq!(json["graphql"], "/graphql");
}

#[tokio::test]
async fn health_check_returns_200() {
    let h = TestHarness::new();
    let (status, _) = h.send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn graphiql_is_served_by_default() {
    let h = TestHarness::new();
    let (status, body) = h.send(get("/graphql")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn graphiql_can_be_disabled() {
    let mut config = Config::default();
    config.server.graphiql = false;
    let h = TestHarness::with_config(config);

    let (status, _) = h.send(get("/graphql")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let data = h.data("{ allPlanets { id } }", serde_json::json!({})).await;
    assert_eq!(data["allPlanets"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let h = TestHarness::new();
    let (status, _) = h.send(get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
