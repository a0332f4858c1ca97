//! PostgreSQL implementation of the link store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::Link;
use crate::domain::store::{CreateOutcome, LinkStore};
use crate::error::AppError;

/// PostgreSQL-backed link store.
///
/// Each mutating operation is a single SQL statement, so atomicity comes
/// from the database itself: the primary key on `code` is the uniqueness
/// authority for creation, and `UPDATE .. RETURNING` is the indivisible
/// increment-and-fetch. No explicit transactions are needed.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn try_create(
        &self,
        code: &str,
        target: &str,
        now: DateTime<Utc>,
    ) -> Result<CreateOutcome, AppError> {
        // ON CONFLICT DO NOTHING turns the unique constraint into the
        // collision signal: no row back means the code was taken.
        let row = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, target, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, target, clicks, last_clicked, created_at
            "#,
        )
        .bind(code)
        .bind(target)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(link) => CreateOutcome::Created(link),
            None => CreateOutcome::CodeExists,
        })
    }

    async fn increment_and_touch(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = $2
            WHERE code = $1
            RETURNING code, target, clicks, last_clicked, created_at
            "#,
        )
        .bind(code)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, target, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, target, clicks, last_clicked, created_at
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
