//! PostgreSQL connectivity probe.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// Pings PostgreSQL through the shared pool.
pub struct PgHealthRepository {
    pool: Arc<PgPool>,
}

impl PgHealthRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<String, AppError> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(version)
    }
}
