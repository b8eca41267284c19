//! # API Endpoint Handlers

use super::{
    AppState,
    types::{HealthResponse, StatusResponse},
};
use crate::graphql;
use async_graphql::http::GraphiQLSource;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Store summary.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (beast_count, last_id) = state.store.summary().await;
    (
        StatusCode::OK,
        Json(StatusResponse {
            beast_count,
            last_id,
        }),
    )
}

// =============================================================================
// GRAPHQL HANDLERS
// =============================================================================

/// Execute a GraphQL request.
///
/// Engine errors (parse, validation, argument types) come back as `200` with
/// an `errors` array, per the GraphQL-over-HTTP convention.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> impl IntoResponse {
    Json(graphql::execute(&state.schema, request).await)
}

/// GraphiQL IDE, when enabled.
pub async fn graphiql_handler(State(state): State<AppState>) -> Response {
    if !state.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
}
