//! # Mutation Root

use super::types::BeastObject;
use crate::handle::StoreHandle;
use async_graphql::{Context, Object, Result};
use bestiary_core::NewBeast;

/// Write entry points.
pub struct MutationRoot;

#[Object(name = "RootMutation")]
impl MutationRoot {
    /// add new beast
    async fn add_beast(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        other_names: Option<Vec<String>>,
        image_url: Option<String>,
    ) -> Result<Option<BeastObject>> {
        let store = ctx.data::<StoreHandle>()?;
        let input = NewBeast::new(name, description)
            .with_other_names(other_names.unwrap_or_default())
            .with_image_url(image_url.unwrap_or_default());
        Ok(Some(store.add_beast(input).await.into()))
    }
}
