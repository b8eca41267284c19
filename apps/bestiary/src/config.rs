//! # Configuration
//!
//! Server settings from an optional TOML file, overridden by environment
//! variables and then by CLI flags.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! graphiql = true
//!
//! [seed]
//! path = "beastData.json"
//!
//! [http]
//! cors_origins = ["http://localhost:3000"]
//! rate_limit = 100
//! body_limit_bytes = 1048576
//! ```
//!
//! ## Environment Variables
//!
//! - `BESTIARY_CORS_ORIGINS`: Comma-separated origins, or "*" for all
//! - `BESTIARY_RATE_LIMIT`: Requests per second (0 disables)

use bestiary_core::{BestiaryError, primitives::DEFAULT_SEED_PATH};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub seed: SeedConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the GraphiQL page on `GET /graphql`.
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            graphiql: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub path: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Allowed CORS origins. Empty means localhost only; `"*"` allows all.
    pub cors_origins: Vec<String>,
    /// Global requests per second. 0 disables rate limiting.
    pub rate_limit: u32,
    pub body_limit_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            rate_limit: 100,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, BestiaryError> {
        toml::from_str(source).map_err(|e| BestiaryError::Config(e.to_string()))
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, BestiaryError> {
        let mut config = match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|e| {
                    BestiaryError::Config(format!("Cannot read '{}': {}", path.display(), e))
                })?;
                Self::from_toml(&source)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `BESTIARY_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(origins) = lookup("BESTIARY_CORS_ORIGINS") {
            self.http.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(raw) = lookup("BESTIARY_RATE_LIMIT") {
            match raw.trim().parse() {
                Ok(rps) => self.http.rate_limit = rps,
                Err(_) => tracing::warn!("Ignoring invalid BESTIARY_RATE_LIMIT '{}'", raw),
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Config::from_toml("").expect("parse"), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_toml("[server]\nport = 9000\n").expect("parse");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.seed.path, PathBuf::from("beastData.json"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_toml("[server]\nprot = 1\n").expect_err("typo");
        assert!(matches!(err, BestiaryError::Config(_)));
    }

    #[test]
    fn env_overrides_http_settings() {
        let vars: BTreeMap<&str, &str> = [
            ("BESTIARY_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("BESTIARY_RATE_LIMIT", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.http.cors_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.http.rate_limit, 0);
    }

    #[test]
    fn invalid_rate_limit_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "BESTIARY_RATE_LIMIT").then(|| "fast".to_string()));
        assert_eq!(config.http.rate_limit, 100);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bestiary.toml");
        std::fs::write(&path, "[seed]\npath = \"data/beasts.json\"\n").expect("write");

        let config = Config::load(Some(&path)).expect("load");
        assert_eq!(config.seed.path, PathBuf::from("data/beasts.json"));
    }
}
