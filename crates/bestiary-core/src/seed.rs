//! # Seed Loading
//!
//! Reads the JSON seed document into Beast records.
//!
//! The document must be a well-formed top-level JSON array; anything else
//! rejects the whole file. Inside the array decoding never fails: field-level
//! leniency is handled by `Beast`'s decoder, and an entry that is not an
//! object becomes the all-empty record.

use crate::primitives::MAX_SEED_FILE_SIZE;
use crate::{Beast, BestiaryError};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Decode a seed document from raw bytes.
pub fn parse_seed(bytes: &[u8]) -> Result<Vec<Beast>, BestiaryError> {
    let records: Vec<Value> =
        serde_json::from_slice(bytes).map_err(|e| BestiaryError::SeedFormat(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|record| match record {
            Value::Object(_) => Beast::deserialize(record).unwrap_or_default(),
            _ => Beast::default(),
        })
        .collect())
}

/// Read and decode the seed file at `path`.
///
/// Fails on a missing or unreadable file, a file over
/// [`MAX_SEED_FILE_SIZE`], or a malformed document.
pub fn read_seed_file(path: &Path) -> Result<Vec<Beast>, BestiaryError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        BestiaryError::IoError(format!("Cannot stat seed file '{}': {}", path.display(), e))
    })?;

    if metadata.len() > MAX_SEED_FILE_SIZE {
        return Err(BestiaryError::SeedTooLarge {
            size: metadata.len(),
            max: MAX_SEED_FILE_SIZE,
        });
    }

    let contents = std::fs::read(path).map_err(|e| {
        BestiaryError::IoError(format!("Cannot read seed file '{}': {}", path.display(), e))
    })?;

    parse_seed(&contents)
}
