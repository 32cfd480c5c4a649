//! Classification of PostgreSQL constraint violations.

/// Primary key of the `url` table.
pub const URL_ALIAS_KEY: &str = "url_pkey";

/// Primary key of the `"user"` table.
pub const USER_EMAIL_KEY: &str = "user_pkey";

/// Unique constraint on `"user".google_sso_id`.
pub const USER_SSO_ID_KEY: &str = "user_google_sso_id_key";

/// Returns `true` when `e` is a unique violation of `constraint`.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
