//! User entities: local accounts and identity provider profiles.

use chrono::{DateTime, Utc};

/// An account, identified by email.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub email: String,
    pub name: Option<String>,
    /// Subject id issued by Google, set once the user signs in through SSO.
    pub google_sso_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a user known only by email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}

/// Profile returned by a single sign-on provider.
///
/// `email` may be empty when the provider did not release it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SsoUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<SsoUser> for User {
    fn from(sso_user: SsoUser) -> Self {
        Self {
            email: sso_user.email,
            name: Some(sso_user.name).filter(|n| !n.is_empty()),
            google_sso_id: Some(sso_user.id),
            created_at: None,
            updated_at: None,
        }
    }
}
