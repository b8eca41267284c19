//! # Bestiary GraphQL Schema
//!
//! ```graphql
//! type Beast { id: Int name: String description: String otherNames: [String!] imageUrl: String }
//!
//! type RootQuery {
//!   beast(name: String): Beast
//!   beastList: [Beast]
//! }
//!
//! type RootMutation {
//!   addBeast(name: String!, description: String!, otherNames: [String!], imageUrl: String): Beast
//! }
//! ```
//!
//! Output types are nullable, but resolvers never answer `null`: a lookup
//! miss yields the all-empty record.
//!
//! Resolvers delegate to [`StoreHandle`], injected as schema data.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::BeastObject;

use crate::handle::StoreHandle;
use async_graphql::{EmptySubscription, Request, Response, Schema};

/// The Bestiary GraphQL schema type.
pub type BestiarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`.
pub fn build_schema(store: StoreHandle) -> BestiarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Execute one request and log engine-reported errors.
pub async fn execute(schema: &BestiarySchema, request: impl Into<Request>) -> Response {
    let response = schema.execute(request).await;
    if response.is_err() {
        for error in &response.errors {
            tracing::debug!(event = "graphql_error", error = %error.message, "GraphQL error");
        }
    }
    response
}

// =============================================================================
// TESTS
// =============================================================================
