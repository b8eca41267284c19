//! # Beast Store
//!
//! The authoritative in-memory Beast collection and its id counter.
//!
//! The store is a plain owned value with `&mut self` mutation. Callers that
//! share it across tasks wrap it in one lock; `add` then runs the
//! counter-increment and the append under that single lock.

use crate::primitives::INITIAL_ID_COUNTER;
use crate::seed::read_seed_file;
use crate::{Beast, BestiaryError, NewBeast};
use std::path::Path;

/// Ordered, append-only collection of Beasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeastStore {
    /// Records in insertion order.
    beasts: Vec<Beast>,
    /// Last id handed out by `add`.
    last_id: i64,
}

impl Default for BeastStore {
    fn default() -> Self {
        Self {
            beasts: Vec::new(),
            last_id: INITIAL_ID_COUNTER,
        }
    }
}

impl BeastStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `beasts` in the given order.
    ///
    /// The id counter starts at [`INITIAL_ID_COUNTER`] regardless of the ids
    /// already present.
    #[must_use]
    pub fn from_beasts(beasts: Vec<Beast>) -> Self {
        Self {
            beasts,
            ..Self::default()
        }
    }

    /// Load a store from the seed file at `path`.
    pub fn load(path: &Path) -> Result<Self, BestiaryError> {
        read_seed_file(path).map(Self::from_beasts)
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Push a record at the end, keeping its id as given.
    pub fn append(&mut self, beast: Beast) {
        self.beasts.push(beast);
    }

    /// Create a Beast from `input` with the next id and append it.
    ///
    /// Duplicate names and ids are accepted.
    pub fn add(&mut self, input: NewBeast) -> Beast {
        self.last_id = self.last_id.saturating_add(1);
        let beast = input.into_beast(self.last_id);
        self.append(beast.clone());
        beast
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// First record, in insertion order, whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Beast> {
        self.beasts.iter().find(|b| b.name == name)
    }

    /// All records in insertion order.
    pub fn beasts(&self) -> &[Beast] {
        &self.beasts
    }

    pub fn len(&self) -> usize {
        self.beasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beasts.is_empty()
    }

    /// Last id handed out (or the initial counter if none yet).
    pub fn last_id(&self) -> i64 {
        self.last_id
    }
}

// =============================================================================
// TESTS
// =============================================================================
