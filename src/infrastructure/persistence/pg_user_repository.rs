//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::{USER_EMAIL_KEY, USER_SSO_ID_KEY, is_unique_violation_on};

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    name: Option<String>,
    google_sso_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// The SSO id is already linked to a different account.
fn linked_elsewhere(email: &str) -> AppError {
    tracing::warn!(user = %email, "SSO id already linked to another account");
    AppError::unauthorized(
        "Unauthorized",
        json!({ "reason": "Identity is linked to another account" }),
    )
}

/// PostgreSQL repository for the `"user"` table.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT email, name, google_sso_id, created_at, updated_at
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| User {
            email: r.email,
            name: r.name,
            google_sso_id: r.google_sso_id,
            created_at: Some(r.created_at),
            updated_at: r.updated_at,
        }))
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO "user" (email, name, google_sso_id, created_at)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.google_sso_id)
        .bind(user.created_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, USER_EMAIL_KEY) {
                return AppError::internal("User already exists", json!({ "email": user.email }));
            }
            if is_unique_violation_on(&e, USER_SSO_ID_KEY) {
                return linked_elsewhere(&user.email);
            }
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn update_sso_id(&self, email: &str, sso_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE "user"
            SET google_sso_id = $2, updated_at = NOW()
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(sso_id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, USER_SSO_ID_KEY) {
                return linked_elsewhere(email);
            }
            AppError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "User not found",
                json!({ "email": email }),
            ));
        }

        Ok(())
    }
}
