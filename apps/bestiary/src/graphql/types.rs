//! # GraphQL Object Types

use async_graphql::SimpleObject;
use bestiary_core::Beast;

/// GraphQL view of a [`Beast`].
///
/// Field names are exposed in camelCase (`otherNames`, `imageUrl`). Every
/// field is nullable in the schema but always filled from the record.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Beast")]
pub struct BeastObject {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub other_names: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl From<Beast> for BeastObject {
    fn from(beast: Beast) -> Self {
        Self {
            id: Some(beast.id),
            name: Some(beast.name),
            description: Some(beast.description),
            other_names: Some(beast.other_names),
            image_url: Some(beast.image_url),
        }
    }
}
