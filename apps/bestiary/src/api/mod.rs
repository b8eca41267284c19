//! # Bestiary HTTP API Module
//!
//! Serves the GraphQL schema over HTTP using axum.
//!
//! ## Endpoints
//!
//! - `POST /graphql` - Execute a GraphQL request (`{query, operationName?, variables?}`)
//! - `GET /graphql` - GraphiQL IDE (if enabled)
//! - `GET /status` - Store summary
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod types;

pub use handlers::{graphiql_handler, graphql_handler, health_handler, status_handler};
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
pub use types::{HealthResponse, StatusResponse};

use crate::config::{Config, HttpConfig};
use crate::graphql::{BestiarySchema, build_schema};
use crate::handle::StoreHandle;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use bestiary_core::BestiaryError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Store handle, also injected into the schema.
    pub store: StoreHandle,
    pub schema: BestiarySchema,
    pub graphiql: bool,
}

impl AppState {
    /// Build state and schema over `store`.
    #[must_use]
    pub fn new(store: StoreHandle, graphiql: bool) -> Self {
        Self {
            schema: build_schema(store.clone()),
            store,
            graphiql,
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from the configured origin list.
///
/// - `["*"]`: allows all origins
/// - empty: localhost only
/// - otherwise: the listed origins; unparsable entries are skipped
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        tracing::info!("CORS: No valid origins configured, defaulting to localhost only");
        return cors_for(localhost_origins());
    }
    cors_for(allowed)
}

fn localhost_origins() -> Vec<HeaderValue> {
    [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .map(HeaderValue::from_static)
    .collect()
}

fn cors_for(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState, http: &HttpConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route(
            "/graphql",
            get(handlers::graphiql_handler).post(handlers::graphql_handler),
        );

    match create_rate_limiter(http.rate_limit) {
        Some(limiter) => {
            tracing::info!("Rate limiting enabled: {} requests/second", http.rate_limit);
            router = router.layer(axum_middleware::from_fn_with_state(
                limiter,
                middleware::rate_limit_middleware,
            ));
        }
        None => tracing::info!("Rate limiting disabled"),
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(http.body_limit_bytes))
        .layer(build_cors_layer(&http.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Seed the store, bind, and serve until Ctrl+C.
pub async fn run_server(config: &Config) -> Result<(), BestiaryError> {
    let store = StoreHandle::load_or_empty(&config.seed.path);
    let state = AppState::new(store, config.server.graphiql);
    let router = create_router(state, &config.http);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BestiaryError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Bestiary GraphQL server listening on http://{}/graphql", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BestiaryError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
