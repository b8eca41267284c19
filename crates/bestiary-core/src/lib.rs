//! # bestiary-core
//!
//! The Beast store - THE LOGIC.
//!
//! An ordered, append-only, in-memory collection of Beast records seeded
//! from a JSON file, plus the counter that hands out ids to new records.
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no logging
//! - No global state: the store is an owned value passed to whoever serves it
//! - All fallible operations return `Result<T, BestiaryError>`

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod seed;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use seed::{parse_seed, read_seed_file};
pub use store::BeastStore;
pub use types::{Beast, BestiaryError, NewBeast};
