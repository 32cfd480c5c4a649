//! Authentication tokens for signed-in users.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies the bearer tokens sent with GraphQL requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Mints a token identifying `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the token payload cannot be encoded.
    fn issue_token(&self, user: &User) -> Result<String, AppError>;

    /// Resolves a token into the user it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, forged,
    /// expired, or names a user that no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn authenticate(&self, token: &str) -> Result<User, AppError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    email: String,
    issued_at: i64,
}

/// HMAC-SHA256 signed tokens of the form `base64url(claims).hex(mac)`.
///
/// The claims carry the user's email and the issue time; a token is accepted
/// for `token_ttl` after it was issued.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
    signing_secret: String,
    token_ttl: Duration,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository used to load the token's owner
    /// - `signing_secret` - HMAC key; tokens signed with another key are rejected
    /// - `token_ttl` - how long an issued token stays valid
    pub fn new(repository: Arc<U>, signing_secret: String, token_ttl: Duration) -> Self {
        Self {
            repository,
            signing_secret,
            token_ttl,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn issue_token_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = TokenClaims {
            email: user.email.clone(),
            issued_at: issued_at.timestamp(),
        };
        let encoded = serde_json::to_vec(&claims).map_err(|e| {
            AppError::internal("Failed to encode token", json!({ "reason": e.to_string() }))
        })?;
        let payload = URL_SAFE_NO_PAD.encode(encoded);
        let signature = self.sign(&payload);

        Ok(format!("{payload}.{signature}"))
    }

    /// Checks signature and age, returning the claimed email.
    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let invalid = |reason: &str| {
            AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
        };

        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| invalid("Malformed token"))?;
        let signature = hex::decode(signature).map_err(|_| invalid("Malformed token"))?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| invalid("Invalid token signature"))?;

        let claims: TokenClaims = URL_SAFE_NO_PAD
            .decode(payload)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or_else(|| invalid("Malformed token"))?;

        let issued_at = DateTime::from_timestamp(claims.issued_at, 0)
            .ok_or_else(|| invalid("Malformed token"))?;
        if now - issued_at > self.token_ttl {
            return Err(invalid("Token expired"));
        }

        Ok(claims.email)
    }
}

#[async_trait]
impl<U: UserRepository> Authenticator for AuthService<U> {
    fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.issue_token_at(user, Utc::now())
    }

    async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let email = self.verify_at(token, Utc::now())?;

        self.repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "Unknown user" }))
            })
    }
}
