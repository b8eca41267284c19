//! # Core Type Definitions
//!
//! This module contains the types shared by the store and the app:
//! - The `Beast` record and its typed creation input (`NewBeast`)
//! - Error types (`BestiaryError`)
//!
//! ## Seed Decoding
//!
//! `Beast` decodes leniently: unknown keys are ignored, and missing keys,
//! explicit `null` values or values of the wrong JSON type fall back to the
//! zero value of the field type. A non-string entry in `otherNames` becomes
//! an empty string.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

// =============================================================================
// BEAST
// =============================================================================

/// A single Beast record.
///
/// `Default` is the all-empty record the GraphQL layer answers with on a
/// lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Beast {
    /// Numeric identifier. Uniqueness is not enforced.
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    /// Display and lookup key.
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    /// Free text.
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    /// Alternative names, in the order given.
    #[serde(deserialize_with = "lenient_strings")]
    pub other_names: Vec<String>,
    /// Image location; empty when unknown.
    #[serde(deserialize_with = "lenient")]
    pub image_url: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let JsonValue::Array(items) = JsonValue::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            JsonValue::String(s) => s,
            _ => String::new(),
        })
        .collect())
}

// =============================================================================
// NEW BEAST
// =============================================================================

/// Typed input for creating a Beast.
///
/// The store assigns the id; everything else comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBeast {
    pub name: String,
    pub description: String,
    pub other_names: Vec<String>,
    pub image_url: String,
}

impl NewBeast {
    /// Create an input with the two required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the alternative names.
    #[must_use]
    pub fn with_other_names(mut self, other_names: Vec<String>) -> Self {
        self.other_names = other_names;
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Turn the input into a record carrying `id`.
    #[must_use]
    pub fn into_beast(self, id: i64) -> Beast {
        Beast {
            id,
            name: self.name,
            description: self.description,
            other_names: self.other_names,
            image_url: self.image_url,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Bestiary system.
///
/// The store itself never fails; errors come from the edges
/// (seed file, configuration).
#[derive(Debug, Error)]
pub enum BestiaryError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The seed document is not a JSON array of Beast records.
    #[error("Seed format error: {0}")]
    SeedFormat(String),

    /// The seed file exceeds the size limit.
    #[error("Seed file is {size} bytes, maximum is {max} bytes")]
    SeedTooLarge { size: u64, max: u64 },

    /// The configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied argument was rejected before execution.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// =============================================================================
// TESTS
// =============================================================================
