//! GraphQL object and input types.

use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, SimpleObject};
use chrono::{DateTime, Utc};

use super::error::into_graphql;
use crate::application::services::UrlRetriever;
use crate::domain::entities::{Url, User};

/// A stored alias and the link it points to.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "URL")]
pub struct UrlObject {
    pub alias: String,
    #[graphql(name = "originalURL")]
    pub original_url: String,
    pub expire_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Url> for UrlObject {
    fn from(url: Url) -> Self {
        Self {
            alias: url.alias,
            original_url: url.original_url,
            expire_at: url.expire_at,
            created_at: url.created_at,
            updated_at: url.updated_at,
        }
    }
}

/// Input of the `createURL` mutation.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "URLInput")]
pub struct UrlInput {
    #[graphql(name = "originalURL")]
    pub original_url: String,
    pub custom_alias: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl From<UrlInput> for Url {
    fn from(input: UrlInput) -> Self {
        Url::new(String::new(), input.original_url, input.expire_at)
    }
}

/// The signed-in user.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// URLs owned by the user, newest first.
    async fn urls(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UrlObject>> {
        let retriever = ctx.data::<Arc<dyn UrlRetriever>>()?;

        let urls = retriever
            .get_urls_by_user(&self.0)
            .await
            .map_err(into_graphql)?;

        Ok(urls.into_iter().map(UrlObject::from).collect())
    }
}
