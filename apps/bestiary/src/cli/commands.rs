//! # CLI Command Implementations

use crate::api;
use crate::config::Config;
use crate::graphql::{self, build_schema};
use crate::handle::StoreHandle;
use async_graphql::{Request, Variables};
use bestiary_core::{Beast, BestiaryError};
use std::path::PathBuf;

/// Maximum size of a GraphQL document read from a file (1 MiB).
const MAX_DOCUMENT_FILE_SIZE: u64 = 1024 * 1024;

/// Resolve the document from `--query` or `--file`.
pub fn read_document(
    query: Option<String>,
    file: Option<PathBuf>,
) -> Result<String, BestiaryError> {
    let document = match (query, file) {
        (Some(query), _) => query,
        (None, Some(path)) => {
            let metadata = std::fs::metadata(&path).map_err(|e| {
                BestiaryError::IoError(format!("Cannot read '{}': {}", path.display(), e))
            })?;
            if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
                return Err(BestiaryError::InvalidArgument(format!(
                    "Document file is {} bytes, maximum is {} bytes",
                    metadata.len(),
                    MAX_DOCUMENT_FILE_SIZE
                )));
            }
            std::fs::read_to_string(&path).map_err(|e| {
                BestiaryError::IoError(format!("Cannot read '{}': {}", path.display(), e))
            })?
        }
        (None, None) => {
            return Err(BestiaryError::InvalidArgument(
                "Provide a document with --query or --file".to_string(),
            ));
        }
    };

    if document.trim().is_empty() {
        return Err(BestiaryError::InvalidArgument(
            "GraphQL document is empty".to_string(),
        ));
    }
    Ok(document)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &Config) -> Result<(), BestiaryError> {
    println!("Bestiary GraphQL Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.server.host);
    println!("  Port:     {}", config.server.port);
    println!("  Seed:     {:?}", config.seed.path);
    println!("  GraphiQL: {}", config.server.graphiql);
    println!();
    println!("Endpoints:");
    println!("  POST /graphql - Execute a GraphQL request");
    if config.server.graphiql {
        println!("  GET  /graphql - GraphiQL IDE");
    }
    println!("  GET  /status  - Store summary");
    println!("  GET  /health  - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(config).await
}

// =============================================================================
// QUERY COMMAND
// =============================================================================

/// Run `document` against a freshly seeded store and return the response JSON.
///
/// Mutations only affect this process's store.
pub async fn cmd_query(
    config: &Config,
    document: &str,
    variables: Option<&str>,
    operation: Option<String>,
) -> Result<String, BestiaryError> {
    let mut request = Request::new(document);

    if let Some(raw) = variables {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| BestiaryError::InvalidArgument(format!("Variables: {}", e)))?;
        if !value.is_object() {
            return Err(BestiaryError::InvalidArgument(
                "Variables must be a JSON object".to_string(),
            ));
        }
        request = request.variables(Variables::from_json(value));
    }
    if let Some(operation) = operation {
        request = request.operation_name(operation);
    }

    let schema = build_schema(StoreHandle::load_or_empty(&config.seed.path));
    let response = graphql::execute(&schema, request).await;

    serde_json::to_string_pretty(&response)
        .map_err(|e| BestiaryError::IoError(format!("Encode response: {}", e)))
}

// =============================================================================
// LIST / GET COMMANDS
// =============================================================================

/// List all seeded beasts.
pub async fn cmd_list(config: &Config, json_mode: bool) -> Result<(), BestiaryError> {
    let beasts = StoreHandle::load_or_empty(&config.seed.path)
        .beast_list()
        .await;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&beasts).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Bestiary");
    println!("========");
    println!("Seed: {:?}", config.seed.path);
    println!();
    if beasts.is_empty() {
        println!("(no beasts)");
    }
    for beast in &beasts {
        println!("{:>4}  {}", beast.id, summary_line(beast));
    }
    Ok(())
}

/// Show the first beast named `name`.
pub async fn cmd_get(config: &Config, name: &str, json_mode: bool) -> Result<(), BestiaryError> {
    let beast = StoreHandle::load_or_empty(&config.seed.path)
        .find_by_name(name)
        .await;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&beast).unwrap_or_default()
        );
        return Ok(());
    }

    match beast {
        Some(beast) => {
            println!("ID:          {}", beast.id);
            println!("Name:        {}", beast.name);
            println!("Description: {}", beast.description);
            if !beast.other_names.is_empty() {
                println!("Other names: {}", beast.other_names.join(", "));
            }
            if !beast.image_url.is_empty() {
                println!("Image:       {}", beast.image_url);
            }
        }
        None => println!("Beast '{}' not found", name),
    }
    Ok(())
}

fn summary_line(beast: &Beast) -> String {
    if beast.other_names.is_empty() {
        beast.name.clone()
    } else {
        format!("{} ({})", beast.name, beast.other_names.join(", "))
    }
}

// =============================================================================
// SCHEMA COMMAND
// =============================================================================

/// GraphQL SDL of the served schema.
pub fn cmd_schema() -> String {
    build_schema(StoreHandle::default()).sdl()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_seed(contents: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("beastData.json");
        std::fs::write(&path, contents).expect("write");
        let mut config = Config::default();
        config.seed.path = path;
        (dir, config)
    }

    #[test]
    fn read_document_requires_input() {
        let err = read_document(None, None).expect_err("no input");
        assert!(matches!(err, BestiaryError::InvalidArgument(_)));
    }

    #[test]
    fn read_document_rejects_blank() {
        assert!(read_document(Some("   ".to_string()), None).is_err());
    }

    #[test]
    fn read_document_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("q.graphql");
        std::fs::write(&path, "{ beastList { id } }").expect("write");
        let document = read_document(None, Some(path)).expect("read");
        assert_eq!(document, "{ beastList { id } }");
    }

    #[tokio::test]
    async fn query_with_variables() {
        let (_dir, config) = config_with_seed(r#"[{"id":1,"name":"Hydra","description":"heads"}]"#);
        let output = cmd_query(
            &config,
            "query Q($name: String) { beast(name: $name) { id description } }",
            Some(r#"{"name":"Hydra"}"#),
            None,
        )
        .await
        .expect("query");

        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["data"]["beast"]["id"], 1);
        assert_eq!(value["data"]["beast"]["description"], "heads");
    }

    #[tokio::test]
    async fn query_rejects_non_object_variables() {
        let (_dir, config) = config_with_seed("[]");
        let err = cmd_query(&config, "{ beastList { id } }", Some("[1]"), None)
            .await
            .expect_err("variables");
        assert!(matches!(err, BestiaryError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn query_on_malformed_seed_sees_empty_store() {
        let (_dir, config) = config_with_seed("[{\"id\": 1,");
        let output = cmd_query(&config, "{ beastList { id } }", None, None)
            .await
            .expect("query");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["data"]["beastList"], serde_json::json!([]));
    }

    #[test]
    fn schema_lists_operations() {
        let sdl = cmd_schema();
        assert!(sdl.contains("beastList"));
        assert!(sdl.contains("addBeast"));
    }
}
