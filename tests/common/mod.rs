//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config and
//! a full [`AppContext`]. Requests are driven through the router with
//! `tower::ServiceExt::oneshot`, so no port is bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use holonet::config::Config;
use holonet::server::{create_router, AppContext};
use holonet_db::pool::{get_conn, init_memory_pool, DbPool};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test harness wrapping an [`AppContext`] backed by an in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration and an empty DB.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new harness with a custom configuration and an empty DB.
    pub fn with_config(config: Config) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(config, db.clone());
        Self { ctx, db }
    }

    /// Create a harness whose DB holds the development fixtures.
    pub fn seeded() -> Self {
        let harness = Self::new();
        let conn = get_conn(&harness.db).expect("failed to get connection");
        holonet_db::seed::seed(&conn).expect("failed to seed");
        harness
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone())
    }

    /// Send a request and return the status with the body as text.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// POST a GraphQL document and return the decoded response envelope.
    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        let body = json!({ "query": query, "variables": variables });
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, text) = self.send(request).await;
        assert_eq!(status, StatusCode::OK, "graphql transport failed: {text}");
        serde_json::from_str(&text).unwrap()
    }

    /// Run a document that must succeed and return its `data`.
    pub async fn data(&self, query: &str, variables: Value) -> Value {
        let response = self.graphql(query, variables).await;
        assert!(
            response.get("errors").is_none(),
            "unexpected errors: {}",
            response["errors"]
        );
        response["data"].clone()
    }
}

/// The `extensions.code` of the first error in a response.
pub fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
}

/// The message of the first error in a response.
pub fn error_message(response: &Value) -> &str {
    response["errors"][0]["message"]
        .as_str()
        .unwrap_or_default()
}
