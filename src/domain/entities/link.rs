//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

/// A shortened URL owned by an account.
///
/// The short code is unique across all links; uniqueness is enforced by the
/// store's insert-time constraint, not by the code generator. The click
/// count is mutated only by the click recorder.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub account_id: i64,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub account_id: i64,
}
