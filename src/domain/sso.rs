//! Single sign-on account contract.

use crate::domain::entities::SsoUser;
use crate::error::AppError;
use async_trait::async_trait;

/// Exchanges an identity provider access token for the user's profile.
///
/// Implemented by [`crate::infrastructure::sso::GoogleAccount`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SingleSignOnAccount: Send + Sync {
    /// Fetches the profile of the user owning `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the provider cannot be reached,
    /// rejects the token, or answers with an undecodable body.
    async fn get_single_sign_on_user(&self, access_token: &str) -> Result<SsoUser, AppError>;
}
