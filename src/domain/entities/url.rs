//! URL entity: an alias pointing at a long link.

use chrono::{DateTime, Utc};

/// A short alias mapped to its original long URL.
///
/// The alias is the primary key; it is unique across all URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Url {
    pub alias: String,
    pub original_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub expire_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Url {
    /// Creates a URL that has not been persisted yet.
    pub fn new(alias: String, original_url: String, expire_at: Option<DateTime<Utc>>) -> Self {
        Self {
            alias,
            original_url,
            created_at: None,
            expire_at,
            updated_at: None,
        }
    }

    /// Returns true if the URL expires at or before `at`.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expire_at.is_some_and(|e| e <= at)
    }
}
