//! URL lookup use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Url, User};
use crate::domain::repositories::{UrlRepository, UserUrlRelationRepository};
use crate::error::AppError;

/// Resolves aliases and lists a user's URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRetriever: Send + Sync {
    /// Returns the URL stored under `alias` if it is still valid after
    /// `expire_after` (defaults to now).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is absent or has expired.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_url(
        &self,
        alias: &str,
        expire_after: Option<DateTime<Utc>>,
    ) -> Result<Url, AppError>;

    /// Returns the URLs owned by `user`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_urls_by_user(&self, user: &User) -> Result<Vec<Url>, AppError>;
}

/// [`UrlRetriever`] reading from the URL and relation repositories.
pub struct RetrieverService<U: UrlRepository, R: UserUrlRelationRepository> {
    url_repository: Arc<U>,
    relation_repository: Arc<R>,
}

impl<U: UrlRepository, R: UserUrlRelationRepository> RetrieverService<U, R> {
    /// Creates a new retriever service.
    pub fn new(url_repository: Arc<U>, relation_repository: Arc<R>) -> Self {
        Self {
            url_repository,
            relation_repository,
        }
    }
}

#[async_trait]
impl<U: UrlRepository, R: UserUrlRelationRepository> UrlRetriever for RetrieverService<U, R> {
    async fn get_url(
        &self,
        alias: &str,
        expire_after: Option<DateTime<Utc>>,
    ) -> Result<Url, AppError> {
        let url = self.url_repository.get_by_alias(alias).await?;

        let at = expire_after.unwrap_or_else(Utc::now);
        if url.is_expired_at(at) {
            return Err(AppError::not_found(
                "URL has expired",
                json!({ "alias": alias, "expire_at": url.expire_at }),
            ));
        }

        Ok(url)
    }

    async fn get_urls_by_user(&self, user: &User) -> Result<Vec<Url>, AppError> {
        let aliases: Vec<String> = self
            .relation_repository
            .find_by_user(user)
            .await?
            .into_iter()
            .map(|relation| relation.url_alias)
            .collect();

        if aliases.is_empty() {
            return Ok(Vec::new());
        }

        let mut urls = self.url_repository.get_by_aliases(&aliases).await?;
        urls.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(urls)
    }
}
