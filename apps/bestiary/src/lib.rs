//! # Bestiary
//!
//! GraphQL endpoint over the in-memory [`bestiary_core::BeastStore`].
//!
//! - [`graphql`] - schema and resolvers (async-graphql)
//! - [`api`] - HTTP binding (axum)
//! - [`cli`] - command-line interface (clap)
//! - [`config`] - TOML + environment configuration

pub mod api;
pub mod cli;
pub mod config;
pub mod graphql;
pub mod handle;

pub use handle::StoreHandle;
