//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// The `links_code_key` unique index makes the insert the atomic uniqueness
/// check for short codes; a violation surfaces as [`AppError::Conflict`]
/// via the shared sqlx error mapping.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, long_url, account_id)
            VALUES ($1, $2, $3)
            RETURNING id, code, long_url, account_id, click_count, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.account_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, long_url, account_id, click_count, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_owner(&self, account_id: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, long_url, account_id, click_count, created_at
            FROM links
            WHERE account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn increment_click_count(&self, link_id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE id = $1")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
