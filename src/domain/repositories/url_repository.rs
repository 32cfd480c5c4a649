//! Repository trait for URL data access.

use crate::domain::entities::Url;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URLs keyed by alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns whether any URL uses `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn is_alias_exist(&self, alias: &str) -> Result<bool, AppError>;

    /// Fetches the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_alias(&self, alias: &str) -> Result<Url, AppError>;

    /// Fetches every URL whose alias is in `aliases`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_aliases(&self, aliases: &[String]) -> Result<Vec<Url>, AppError>;

    /// Inserts a new URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExist`] if the alias is already taken, whatever
    /// the rest of the payload.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, url: &Url) -> Result<(), AppError>;

    /// Rewrites the URL stored under `old_alias` with the fields of `url`,
    /// including its alias, and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches `old_alias`.
    /// Returns [`AppError::AliasExist`] if `url.alias` is taken by another row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, old_alias: &str, url: &Url) -> Result<(), AppError>;
}
