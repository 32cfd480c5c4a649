//! Mutation root.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object};

use super::error::{ApiError, into_graphql};
use super::types::{UrlInput, UrlObject};
use crate::application::services::{UrlCreator, UrlModifier};
use crate::domain::entities::User;

pub struct Mutation;

/// Returns the request's user or rejects the mutation.
fn viewer<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a User> {
    ctx.data_opt::<User>().ok_or_else(|| {
        tracing::debug!("Anonymous mutation rejected");
        ApiError::Unauthorized.extend()
    })
}

#[Object]
impl Mutation {
    /// Creates an alias for `url.originalURL`, using `url.customAlias` when given.
    #[graphql(name = "createURL")]
    async fn create_url(
        &self,
        ctx: &Context<'_>,
        url: UrlInput,
        is_public: bool,
    ) -> async_graphql::Result<Option<UrlObject>> {
        let user = viewer(ctx)?;
        let creator = ctx.data::<Arc<dyn UrlCreator>>()?;

        let custom_alias = url.custom_alias.clone();
        let created = creator
            .create_url(url.into(), custom_alias, user, is_public)
            .await
            .map_err(into_graphql)?;

        Ok(Some(created.into()))
    }

    /// Renames one of the viewer's aliases.
    #[graphql(name = "modifyURL")]
    async fn modify_url(
        &self,
        ctx: &Context<'_>,
        old_alias: String,
        new_alias: String,
    ) -> async_graphql::Result<Option<UrlObject>> {
        let user = viewer(ctx)?;
        let modifier = ctx.data::<Arc<dyn UrlModifier>>()?;

        let updated = modifier
            .update_url(&old_alias, &new_alias, user)
            .await
            .map_err(into_graphql)?;

        Ok(Some(updated.into()))
    }
}
