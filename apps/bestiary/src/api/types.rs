//! # API Response Types
//!
//! JSON bodies for the non-GraphQL endpoints. GraphQL requests and responses
//! use the engine's own `async_graphql::{Request, Response}`.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Store summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub beast_count: usize,
    /// Last id assigned by `addBeast` (10 before the first one).
    pub last_id: i64,
}
