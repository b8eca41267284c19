//! # Bestiary - GraphQL Server
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 apps/bestiary (THE BINARY)                 │
//! │                                                            │
//! │  ┌────────────┐   ┌────────────┐   ┌─────────────────┐     │
//! │  │    CLI     │   │  HTTP API  │   │     GraphQL     │     │
//! │  │   (clap)   │──▶│   (axum)   │──▶│ (async-graphql) │     │
//! │  └────────────┘   └────────────┘   └────────┬────────┘     │
//! │                                             ▼              │
//! │                                    ┌─────────────────┐     │
//! │                                    │  bestiary-core  │     │
//! │                                    │   (THE STORE)   │     │
//! │                                    └─────────────────┘     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! bestiary server --host 0.0.0.0 --port 8080
//!
//! # One-off queries against the seed data
//! bestiary query -e '{ beastList { id name } }'
//! bestiary get -n Hydra
//! bestiary schema
//! ```

use bestiary::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // BESTIARY_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so `query`/`list --json-mode` output stays clean.
    let log_format = std::env::var("BESTIARY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "bestiary=debug,bestiary_core=debug,tower_http=debug"
    } else {
        "bestiary=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && matches!(cli.command, Some(cli::Commands::Server { .. })) {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_banner() {
    println!(
        r#"
  ╔╗ ╔═╗╔═╗╔╦╗╦╔═╗╦═╗╦ ╦
  ╠╩╗║╣ ╚═╗ ║ ║╠═╣╠╦╝╚╦╝
  ╚═╝╚═╝╚═╝ ╩ ╩╩ ╩╩╚═ ╩

  Bestiary GraphQL Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
