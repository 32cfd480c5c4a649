//! URL creation use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Url, User};
use crate::domain::repositories::{UrlRepository, UserUrlRelationRepository};
use crate::error::AppError;
use crate::utils::alias::{self, ALIAS_MAX_LENGTH};
use crate::utils::long_link::normalize_long_link;

/// Creates aliases for long links on behalf of a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlCreator: Send + Sync {
    /// Creates a URL owned by `user`.
    ///
    /// `url.alias` is ignored: the alias is `custom_alias` when given, or a
    /// generated one otherwise.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidLongLink`] if `url.original_url` is not an absolute http(s) URL
    /// - [`AppError::InvalidAlias`] if `custom_alias` violates the alias rules
    /// - [`AppError::AliasExist`] if `custom_alias` is taken
    /// - [`AppError::Internal`] on database errors
    async fn create_url(
        &self,
        url: Url,
        custom_alias: Option<String>,
        user: &User,
        is_public: bool,
    ) -> Result<Url, AppError>;
}

/// [`UrlCreator`] persisting through the URL and relation repositories.
pub struct CreatorService<U: UrlRepository, R: UserUrlRelationRepository> {
    url_repository: Arc<U>,
    relation_repository: Arc<R>,
}

impl<U: UrlRepository, R: UserUrlRelationRepository> CreatorService<U, R> {
    /// Creates a new creator service.
    pub fn new(url_repository: Arc<U>, relation_repository: Arc<R>) -> Self {
        Self {
            url_repository,
            relation_repository,
        }
    }

    /// Picks a random alias that is not taken yet.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = alias::generate_alias();

            if !self.url_repository.is_alias_exist(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    async fn resolve_custom_alias(&self, custom_alias: String) -> Result<String, AppError> {
        if !alias::is_valid(&custom_alias) {
            return Err(AppError::invalid_alias(
                "Custom alias is invalid",
                json!({ "alias": custom_alias, "max_length": ALIAS_MAX_LENGTH }),
            ));
        }

        if self.url_repository.is_alias_exist(&custom_alias).await? {
            return Err(AppError::alias_exist(
                "Alias already exists",
                json!({ "alias": custom_alias }),
            ));
        }

        Ok(custom_alias)
    }
}

#[async_trait]
impl<U: UrlRepository, R: UserUrlRelationRepository> UrlCreator for CreatorService<U, R> {
    async fn create_url(
        &self,
        url: Url,
        custom_alias: Option<String>,
        user: &User,
        is_public: bool,
    ) -> Result<Url, AppError> {
        let original_url = normalize_long_link(&url.original_url).map_err(|e| {
            AppError::invalid_long_link(
                "Long link is invalid",
                json!({ "long_link": url.original_url, "reason": e.to_string() }),
            )
        })?;

        let alias = match custom_alias {
            Some(custom) => self.resolve_custom_alias(custom).await?,
            None => self.generate_unique_alias().await?,
        };

        let new_url = Url {
            alias,
            original_url,
            created_at: Some(Utc::now()),
            expire_at: url.expire_at,
            updated_at: None,
        };

        self.url_repository.create(&new_url).await?;
        self.relation_repository
            .create_relation(user, &new_url)
            .await?;

        tracing::info!(
            alias = %new_url.alias,
            user = %user.email,
            is_public,
            "URL created"
        );

        Ok(new_url)
    }
}
