//! Sign-in through a single sign-on provider.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::sso::SingleSignOnAccount;
use crate::error::AppError;

/// Turns an identity provider access token into a local user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SingleSignOn: Send + Sync {
    /// Signs in the owner of `access_token`, registering them on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the provider rejects the access
    /// token or did not share an email, if the email belongs to an account
    /// linked to another provider id, or if the provider id is already linked
    /// to another account.
    /// Returns [`AppError::Internal`] if the provider or the database fails.
    async fn sign_in(&self, access_token: &str) -> Result<User, AppError>;
}

/// [`SingleSignOn`] backed by a provider account adapter and the user repository.
pub struct SsoService<A: SingleSignOnAccount, U: UserRepository> {
    account: Arc<A>,
    user_repository: Arc<U>,
}

impl<A: SingleSignOnAccount, U: UserRepository> SsoService<A, U> {
    /// Creates a new SSO service.
    pub fn new(account: Arc<A>, user_repository: Arc<U>) -> Self {
        Self {
            account,
            user_repository,
        }
    }
}

#[async_trait]
impl<A: SingleSignOnAccount, U: UserRepository> SingleSignOn for SsoService<A, U> {
    async fn sign_in(&self, access_token: &str) -> Result<User, AppError> {
        let sso_user = self.account.get_single_sign_on_user(access_token).await?;

        if sso_user.email.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Identity provider did not share an email" }),
            ));
        }

        let Some(mut user) = self.user_repository.find_by_email(&sso_user.email).await? else {
            let mut user = User::from(sso_user);
            user.created_at = Some(Utc::now());
            self.user_repository.create(&user).await?;
            tracing::info!(user = %user.email, "Registered user through SSO");
            return Ok(user);
        };

        match user.google_sso_id.as_deref() {
            None => {
                self.user_repository
                    .update_sso_id(&user.email, &sso_user.id)
                    .await?;
                user.google_sso_id = Some(sso_user.id);
            }
            Some(linked) if linked != sso_user.id => {
                tracing::warn!(user = %user.email, "SSO id does not match linked account");
                return Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Account is linked to another identity" }),
                ));
            }
            Some(_) => {}
        }

        Ok(user)
    }
}
