//! # Store Constants
//!
//! Fixed values compiled into the binary.

/// Value of the id counter before the first `addBeast`.
///
/// The first created Beast gets `INITIAL_ID_COUNTER + 1`, whatever ids the
/// seed file contains.
pub const INITIAL_ID_COUNTER: i64 = 10;

/// Seed file location used when none is configured.
pub const DEFAULT_SEED_PATH: &str = "beastData.json";

/// Maximum seed file size (16 MiB).
///
/// Larger files are treated as a load failure rather than read into memory.
pub const MAX_SEED_FILE_SIZE: u64 = 16 * 1024 * 1024;
