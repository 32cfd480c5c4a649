//! Ownership link between a user and a URL.

/// Join record associating a user with a URL they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUrlRelation {
    pub user_email: String,
    pub url_alias: String,
}
