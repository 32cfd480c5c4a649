//! Repository trait for user accounts.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an email
    /// that is already registered.
    async fn create(&self, user: &User) -> Result<(), AppError>;

    /// Links a Google subject id to an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has `email`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_sso_id(&self, email: &str, sso_id: &str) -> Result<(), AppError>;
}
