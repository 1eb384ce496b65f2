use crate::config::Config;
use crate::graphql::{build_schema, HolonetSchema};
use anyhow::{Context, Result};
use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use holonet_db::pool::{get_conn, DbPool};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Database connection pool
    pub db_pool: DbPool,
    /// Executable GraphQL schema
    pub schema: HolonetSchema,
}

impl AppContext {
    /// Build a context with the default schema over `db_pool`.
    pub fn new(config: Config, db_pool: DbPool) -> Self {
        let schema = build_schema(db_pool.clone());
        Self {
            config: Arc::new(config),
            db_pool,
            schema,
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let graphql = if ctx.config.server.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/graphql", graphql)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn graphql_handler(
    State(ctx): State<AppContext>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(ctx.schema.execute(request).await)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the holonet GraphQL API. Open /graphql to get started.",
        "graphql": "/graphql",
    }))
}

async fn health_check(State(ctx): State<AppContext>) -> impl IntoResponse {
    match get_conn(&ctx.db_pool) {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Start the HTTP server
pub async fn start_server(config: Config, db_pool: DbPool) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let app = create_router(AppContext::new(config, db_pool));

    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL endpoint at http://{}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
