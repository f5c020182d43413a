//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for append-only click events.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO link_clicks (link_id)
            VALUES ($1)
            RETURNING id, link_id, clicked_at
            "#,
        )
        .bind(new_click.link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn find_by_link_and_range(
        &self,
        link_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Click>, AppError> {
        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_id, clicked_at
            FROM link_clicks
            WHERE link_id = $1
              AND clicked_at >= $2
              AND clicked_at <= $3
            "#,
        )
        .bind(link_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn find_by_links_and_range(
        &self,
        link_ids: &[i64],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Click>, AppError> {
        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_id, clicked_at
            FROM link_clicks
            WHERE link_id = ANY($1)
              AND clicked_at >= $2
              AND clicked_at < $3
            "#,
        )
        .bind(link_ids)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }
}
