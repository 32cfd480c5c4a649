//! URL modification use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Url, User};
use crate::domain::repositories::{UrlRepository, UserUrlRelationRepository};
use crate::error::AppError;
use crate::utils::alias::{self, ALIAS_MAX_LENGTH};

/// Renames aliases owned by a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlModifier: Send + Sync {
    /// Moves the URL stored under `old_alias` to `new_alias`.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if `old_alias` does not exist or is not owned by `user`
    /// - [`AppError::InvalidAlias`] if `new_alias` violates the alias rules
    /// - [`AppError::AliasExist`] if `new_alias` is taken
    /// - [`AppError::Internal`] on database errors
    async fn update_url(
        &self,
        old_alias: &str,
        new_alias: &str,
        user: &User,
    ) -> Result<Url, AppError>;
}

/// [`UrlModifier`] persisting through the URL and relation repositories.
///
/// The URL row and the relation row are written one after the other. The
/// relation's foreign key cascades alias updates, so the ownership link
/// follows the URL even if the second write fails.
pub struct ModifierService<U: UrlRepository, R: UserUrlRelationRepository> {
    url_repository: Arc<U>,
    relation_repository: Arc<R>,
}

impl<U: UrlRepository, R: UserUrlRelationRepository> ModifierService<U, R> {
    /// Creates a new modifier service.
    pub fn new(url_repository: Arc<U>, relation_repository: Arc<R>) -> Self {
        Self {
            url_repository,
            relation_repository,
        }
    }
}

#[async_trait]
impl<U: UrlRepository, R: UserUrlRelationRepository> UrlModifier for ModifierService<U, R> {
    async fn update_url(
        &self,
        old_alias: &str,
        new_alias: &str,
        user: &User,
    ) -> Result<Url, AppError> {
        let mut url = self.url_repository.get_by_alias(old_alias).await?;

        if !self.relation_repository.is_owner(user, old_alias).await? {
            tracing::debug!(alias = old_alias, user = %user.email, "Rename refused: not owner");
            return Err(AppError::not_found(
                "Alias not found",
                json!({ "alias": old_alias }),
            ));
        }

        if !alias::is_valid(new_alias) {
            return Err(AppError::invalid_alias(
                "New alias is invalid",
                json!({ "alias": new_alias, "max_length": ALIAS_MAX_LENGTH }),
            ));
        }

        url.alias = new_alias.to_string();
        url.updated_at = Some(Utc::now());

        self.url_repository.update(old_alias, &url).await?;
        self.relation_repository
            .update_relation(user, old_alias, &url)
            .await?;

        tracing::info!(old_alias, new_alias, user = %user.email, "Alias renamed");

        Ok(url)
    }
}
