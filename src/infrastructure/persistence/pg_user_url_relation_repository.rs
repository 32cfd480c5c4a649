//! PostgreSQL implementation of the user-URL relation repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Url, User, UserUrlRelation};
use crate::domain::repositories::UserUrlRelationRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RelationRow {
    user_email: String,
    url_alias: String,
}

/// PostgreSQL repository for the `user_url_relation` join table.
///
/// `url_alias` references `url(alias)` with `ON UPDATE CASCADE`, so renaming
/// a URL already re-points its relations; [`Self::update_relation`] is then
/// a no-op that succeeds.
pub struct PgUserUrlRelationRepository {
    pool: Arc<PgPool>,
}

impl PgUserUrlRelationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserUrlRelationRepository for PgUserUrlRelationRepository {
    async fn create_relation(&self, user: &User, url: &Url) -> Result<(), AppError> {
        sqlx::query("INSERT INTO user_url_relation (user_email, url_alias) VALUES ($1, $2)")
            .bind(&user.email)
            .bind(&url.alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update_relation(
        &self,
        user: &User,
        old_alias: &str,
        url: &Url,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE user_url_relation
            SET url_alias = $3
            WHERE user_email = $1 AND url_alias = $2
            "#,
        )
        .bind(&user.email)
        .bind(old_alias)
        .bind(&url.alias)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn is_owner(&self, user: &User, alias: &str) -> Result<bool, AppError> {
        let owned: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM user_url_relation
                WHERE user_email = $1 AND url_alias = $2
            )
            "#,
        )
        .bind(&user.email)
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(owned)
    }

    async fn find_by_user(&self, user: &User) -> Result<Vec<UserUrlRelation>, AppError> {
        let rows = sqlx::query_as::<_, RelationRow>(
            "SELECT user_email, url_alias FROM user_url_relation WHERE user_email = $1",
        )
        .bind(&user.email)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| UserUrlRelation {
                user_email: r.user_email,
                url_alias: r.url_alias,
            })
            .collect())
    }
}
