//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

/// A click recorded when a shortened link is resolved.
///
/// Append-only and immutable; the timestamp is assigned by the database at
/// insert time.
#[derive(Debug, Clone, FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_fields() {
        let now = Utc::now();
        let click = Click {
            id: 1,
            link_id: 42,
            clicked_at: now,
        };

        assert_eq!(click.link_id, 42);
        assert_eq!(click.clicked_at, now);
    }

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick { link_id: 99 };
        assert_eq!(new_click.link_id, 99);
    }
}
