//! # Query Root

use super::types::BeastObject;
use crate::handle::StoreHandle;
use async_graphql::{Context, Object, Result};

/// Read entry points.
pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// Get single beast
    async fn beast(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> Result<Option<BeastObject>> {
        let store = ctx.data::<StoreHandle>()?;
        Ok(Some(store.beast(name.as_deref()).await.into()))
    }

    /// List of beasts
    async fn beast_list(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<BeastObject>>>> {
        let store = ctx.data::<StoreHandle>()?;
        Ok(Some(
            store
                .beast_list()
                .await
                .into_iter()
                .map(|beast| Some(beast.into()))
                .collect(),
        ))
    }
}
