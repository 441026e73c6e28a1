//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::StoreError;
use crate::utils::db_error::{
    ORIGINAL_URL_CONSTRAINT, SHORT_URL_CONSTRAINT, is_unique_violation_on,
};

/// Advisory lock key serializing short code assignment.
const CREATE_LOCK_KEY: i64 = 0x5348_4f52_5455_524c;

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    original_url: String,
    short_url: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(r: ShortLinkRow) -> Self {
        ShortLink::new(r.id, r.original_url, r.short_url, r.created_at)
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// Queries are bound at runtime, so the crate builds without a reachable
/// database. The schema lives in `migrations/`.
///
/// `create_next` runs count and insert in one transaction under
/// `pg_advisory_xact_lock`, so a burst of new URLs gets consecutive codes
/// without unique-constraint retries. `CodeTaken` still surfaces when a code
/// was written outside this path.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortLink>, StoreError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM short_links
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<ShortLink>, StoreError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM short_links
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn create_next(&self, original_url: &str) -> Result<ShortLink, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Held until commit, so concurrent writers never compute the same count.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(CREATE_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(&mut *tx)
            .await?;
        let short_url = count + 1;

        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(original_url)
        .bind(short_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, SHORT_URL_CONSTRAINT) {
                debug!(short_url, "Short code already assigned");
                StoreError::CodeTaken(short_url)
            } else if is_unique_violation_on(&e, ORIGINAL_URL_CONSTRAINT) {
                StoreError::DuplicateUrl
            } else {
                StoreError::Database(e)
            }
        })?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortLink>, StoreError> {
        let offset = (page.max(1) - 1).saturating_mul(page_size);

        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM short_links
            ORDER BY short_url ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }
}
