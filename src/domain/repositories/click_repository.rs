//! Repository trait for click event storage and range queries.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for click events.
///
/// Click storage is append-only; events are never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event; the timestamp is assigned at insert time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors (including a
    /// dangling link reference).
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Fetches a link's click events with `from <= clicked_at <= to`
    /// (inclusive on both bounds).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_link_and_range(
        &self,
        link_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Click>, AppError>;

    /// Fetches click events across several links with
    /// `from <= clicked_at < to` (half-open range).
    ///
    /// Used for owner-scoped aggregation where the bounds are day
    /// boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_links_and_range(
        &self,
        link_ids: &[i64],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Click>, AppError>;
}
