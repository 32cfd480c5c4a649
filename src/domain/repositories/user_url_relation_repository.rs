//! Repository trait for user-URL ownership records.

use crate::domain::entities::{Url, User, UserUrlRelation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the join table linking users to their URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserUrlRelationRepository: Send + Sync {
    /// Records that `user` owns `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_relation(&self, user: &User, url: &Url) -> Result<(), AppError>;

    /// Re-points the relation of `user` from `old_alias` to `url.alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_relation(&self, user: &User, old_alias: &str, url: &Url)
    -> Result<(), AppError>;

    /// Returns whether `user` owns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn is_owner(&self, user: &User, alias: &str) -> Result<bool, AppError>;

    /// Lists the relations of `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user(&self, user: &User) -> Result<Vec<UserUrlRelation>, AppError>;
}
