//! # Store Handle
//!
//! Shared, lock-guarded access to the [`BeastStore`].
//!
//! Every request task holds a clone of the same handle. Reads take the read
//! lock; `add_beast` takes the write lock for the whole
//! counter-increment-and-append, so concurrent mutations never share an id.

use bestiary_core::{Beast, BeastStore, NewBeast};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to the process-wide store.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    store: Arc<RwLock<BeastStore>>,
}

impl StoreHandle {
    /// Wrap an owned store.
    #[must_use]
    pub fn new(store: BeastStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Seed a handle from `path`, falling back to an empty store.
    ///
    /// A missing, oversized or malformed seed file is logged and never
    /// aborts startup.
    pub fn load_or_empty(path: &Path) -> Self {
        match BeastStore::load(path) {
            Ok(store) => {
                tracing::info!(
                    event = "seed_loaded",
                    path = %path.display(),
                    count = store.len(),
                    "Loaded seed data"
                );
                Self::new(store)
            }
            Err(e) => {
                tracing::error!(
                    event = "seed_failed",
                    path = %path.display(),
                    error = %e,
                    "Seed load failed, starting with an empty store"
                );
                Self::default()
            }
        }
    }

    // =========================================================================
    // RESOLVER OPERATIONS
    // =========================================================================

    /// Lookup by exact name.
    ///
    /// An absent name or a miss yields the all-empty record.
    pub async fn beast(&self, name: Option<&str>) -> Beast {
        match name {
            Some(name) => self.find_by_name(name).await.unwrap_or_default(),
            None => Beast::default(),
        }
    }

    /// First record named exactly `name`, if any.
    pub async fn find_by_name(&self, name: &str) -> Option<Beast> {
        self.store.read().await.find_by_name(name).cloned()
    }

    /// Snapshot of every record in insertion order.
    pub async fn beast_list(&self) -> Vec<Beast> {
        self.store.read().await.beasts().to_vec()
    }

    /// Create a record with the next id and append it.
    pub async fn add_beast(&self, input: NewBeast) -> Beast {
        let beast = self.store.write().await.add(input);
        tracing::info!(
            event = "beast_added",
            id = beast.id,
            name = %beast.name,
            "Beast added"
        );
        beast
    }

    /// Record count and last assigned id, read under one lock.
    pub async fn summary(&self) -> (usize, i64) {
        let store = self.store.read().await;
        (store.len(), store.last_id())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> StoreHandle {
        StoreHandle::new(BeastStore::from_beasts(vec![
            Beast {
                id: 1,
                name: "Hydra".to_string(),
                description: "first".to_string(),
                ..Beast::default()
            },
            Beast {
                id: 2,
                name: "Hydra".to_string(),
                description: "second".to_string(),
                ..Beast::default()
            },
        ]))
    }

    #[tokio::test]
    async fn beast_without_name_is_default() {
        assert_eq!(seeded().beast(None).await, Beast::default());
    }

    #[tokio::test]
    async fn beast_miss_is_default() {
        assert_eq!(seeded().beast(Some("Chimera")).await, Beast::default());
    }

    #[tokio::test]
    async fn beast_returns_first_duplicate() {
        let found = seeded().beast(Some("Hydra")).await;
        assert_eq!(found.description, "first");
    }

    #[tokio::test]
    async fn concurrent_adds_get_distinct_ids() {
        let handle = StoreHandle::default();
        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let handle = handle.clone();
                tokio::spawn(async move {
                    handle
                        .add_beast(NewBeast::new(format!("beast-{}", i), ""))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.expect("join"));
        }
        ids.sort_unstable();

        let expected: Vec<i64> = (11..43).collect();
        assert_eq!(ids, expected);
        assert_eq!(handle.summary().await, (32, 42));
    }

    #[test]
    fn load_or_empty_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let handle = StoreHandle::load_or_empty(&dir.path().join("missing.json"));
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        assert!(rt.block_on(handle.beast_list()).is_empty());
    }
}
