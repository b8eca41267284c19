//! # Bestiary CLI Module
//!
//! ## Available Commands
//!
//! - `server` - Start the GraphQL HTTP server
//! - `query` - Execute one GraphQL document against the seeded store
//! - `list` - List seeded beasts
//! - `get` - Look up a beast by name
//! - `schema` - Print the GraphQL SDL

mod commands;

use crate::config::Config;
use bestiary_core::BestiaryError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Bestiary - GraphQL endpoint over an in-memory Beast collection.
#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the JSON seed file (overrides the config file)
    #[arg(short = 'S', long, global = true)]
    pub seed: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable the GraphiQL page on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL document and print the JSON response
    Query {
        /// GraphQL document
        #[arg(short = 'e', long, conflicts_with = "file")]
        query: Option<String>,

        /// File containing the GraphQL document
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Operation to run when the document defines several
        #[arg(short, long)]
        operation: Option<String>,
    },

    /// List all beasts in the seed data
    List,

    /// Show the first beast with the given name
    Get {
        /// Exact, case-sensitive name
        #[arg(short, long)]
        name: String,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), BestiaryError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed.path = seed;
    }
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server {
            host,
            port,
            no_graphiql,
        }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if no_graphiql {
                config.server.graphiql = false;
            }
            cmd_server(&config).await
        }
        Some(Commands::Query {
            query,
            file,
            variables,
            operation,
        }) => {
            let document = read_document(query, file)?;
            let output = cmd_query(&config, &document, variables.as_deref(), operation).await?;
            println!("{}", output);
            Ok(())
        }
        Some(Commands::Get { name }) => cmd_get(&config, &name, json_mode).await,
        Some(Commands::Schema) => {
            println!("{}", cmd_schema());
            Ok(())
        }
        Some(Commands::List) | None => cmd_list(&config, json_mode).await,
    }
}
