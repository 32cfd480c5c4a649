//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::{URL_ALIAS_KEY, is_unique_violation_on};

/// Maps a violation of the alias primary key to [`AppError::AliasExist`].
fn map_alias_conflict(e: sqlx::Error, alias: &str) -> AppError {
    if is_unique_violation_on(&e, URL_ALIAS_KEY) {
        return AppError::alias_exist("Alias already exists", json!({ "alias": alias }));
    }
    AppError::from(e)
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    alias: String,
    original_url: String,
    created_at: Option<DateTime<Utc>>,
    expire_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<UrlRow> for Url {
    fn from(row: UrlRow) -> Self {
        Self {
            alias: row.alias,
            original_url: row.original_url,
            created_at: row.created_at,
            expire_at: row.expire_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for the `url` table.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn is_alias_exist(&self, alias: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM url WHERE alias = $1)")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Url, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT alias, original_url, created_at, expire_at, updated_at
            FROM url
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Url::from)
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "alias": alias })))
    }

    async fn get_by_aliases(&self, aliases: &[String]) -> Result<Vec<Url>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT alias, original_url, created_at, expire_at, updated_at
            FROM url
            WHERE alias = ANY($1)
            "#,
        )
        .bind(aliases)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Url::from).collect())
    }

    async fn create(&self, url: &Url) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO url (alias, original_url, created_at, expire_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&url.alias)
        .bind(&url.original_url)
        .bind(url.created_at)
        .bind(url.expire_at)
        .bind(url.updated_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_alias_conflict(e, &url.alias))?;

        Ok(())
    }

    async fn update(&self, old_alias: &str, url: &Url) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE url
            SET alias = $2,
                original_url = $3,
                expire_at = $4,
                updated_at = COALESCE($5, NOW())
            WHERE alias = $1
            "#,
        )
        .bind(old_alias)
        .bind(&url.alias)
        .bind(&url.original_url)
        .bind(url.expire_at)
        .bind(url.updated_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_alias_conflict(e, &url.alias))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "alias": old_alias }),
            ));
        }

        Ok(())
    }
}
