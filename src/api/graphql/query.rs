//! Query root.

use std::sync::Arc;

use async_graphql::{Context, Object};
use chrono::{DateTime, Utc};

use super::error::into_graphql;
use super::types::{UrlObject, UserObject};
use crate::application::services::UrlRetriever;
use crate::domain::entities::User;

pub struct Query;

#[Object]
impl Query {
    /// Looks up an alias that has not expired by `expireAfter` (default: now).
    async fn url(
        &self,
        ctx: &Context<'_>,
        alias: String,
        expire_after: Option<DateTime<Utc>>,
    ) -> async_graphql::Result<Option<UrlObject>> {
        let retriever = ctx.data::<Arc<dyn UrlRetriever>>()?;

        let url = retriever
            .get_url(&alias, expire_after)
            .await
            .map_err(into_graphql)?;

        Ok(Some(url.into()))
    }

    /// The authenticated user, or null for anonymous requests.
    async fn viewer(&self, ctx: &Context<'_>) -> Option<UserObject> {
        ctx.data_opt::<User>().cloned().map(UserObject)
    }
}
