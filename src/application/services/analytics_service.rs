//! Date-bucketed click analytics.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde_json::json;

use crate::domain::entities::{Account, Click};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Click count for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub count: i64,
}

/// Service for aggregating click events into per-day counts.
///
/// Dates with zero events are omitted, never zero-filled, and the emitted
/// collection has no guaranteed order; callers needing chronological output
/// sort it themselves.
pub struct AnalyticsService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> AnalyticsService<L, C> {
    /// Creates a new analytics service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Groups one link's clicks within `[start, end]` (inclusive,
    /// date-time precision) by UTC calendar date.
    ///
    /// Ownership is enforced: a code owned by a different account yields
    /// the same `NotFound` as a nonexistent code, so the endpoint does not
    /// reveal which codes exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown or foreign code —
    /// distinguishable from an existing link with zero clicks in range,
    /// which yields an empty grouping.
    pub async fn clicks_by_date(
        &self,
        code: &str,
        owner: &Account,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyClicks>, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .filter(|link| link.account_id == owner.id)
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        let clicks = self
            .click_repository
            .find_by_link_and_range(link.id, start, end)
            .await?;

        Ok(group_by_date(&clicks)
            .into_iter()
            .map(|(date, count)| DailyClicks { date, count })
            .collect())
    }

    /// Groups clicks across all of an account's links by UTC calendar date.
    ///
    /// The range is half-open: from the start of `start_date` through the
    /// start of the day after `end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. An owner with no
    /// links (or no clicks in range) gets an empty map, not an error.
    pub async fn total_clicks_by_owner(
        &self,
        owner: &Account,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HashMap<NaiveDate, i64>, AppError> {
        let links = self.link_repository.find_by_owner(owner.id).await?;
        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let link_ids: Vec<i64> = links.iter().map(|link| link.id).collect();

        let from = start_date.and_time(NaiveTime::MIN).and_utc();
        let to = end_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| {
                AppError::bad_request("End date out of range", json!({ "end": end_date }))
            })?
            .and_time(NaiveTime::MIN)
            .and_utc();

        let clicks = self
            .click_repository
            .find_by_links_and_range(&link_ids, from, to)
            .await?;

        Ok(group_by_date(&clicks))
    }
}

/// Buckets clicks by the UTC calendar date of their timestamp.
fn group_by_date(clicks: &[Click]) -> HashMap<NaiveDate, i64> {
    let mut buckets = HashMap::new();
    for click in clicks {
        *buckets.entry(click.clicked_at.date_naive()).or_insert(0) += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DEFAULT_ROLE, Link};
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::TimeZone;

    fn test_owner(id: i64) -> Account {
        Account {
            id,
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_link(id: i64, code: &str, account_id: i64) -> Link {
        Link {
            id,
            code: code.to_string(),
            long_url: "https://example.com/".to_string(),
            account_id,
            click_count: 0,
            created_at: Utc::now(),
        }
    }

    fn click_at(link_id: i64, y: i32, m: u32, d: u32, h: u32) -> Click {
        Click {
            id: 0,
            link_id,
            clicked_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_clicks_by_date_buckets_per_day() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        let link = test_link(10, "abc12345", 1);
        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        // Two clicks on day A, one on day B.
        click_repo
            .expect_find_by_link_and_range()
            .withf(|&id, _, _| id == 10)
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    click_at(10, 2026, 8, 1, 9),
                    click_at(10, 2026, 8, 1, 17),
                    click_at(10, 2026, 8, 2, 12),
                ])
            });

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let mut result = service
            .clicks_by_date(
                "abc12345",
                &test_owner(1),
                Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 8, 2, 23, 59, 59).unwrap(),
            )
            .await
            .unwrap();

        result.sort_by_key(|d| d.date);
        assert_eq!(
            result,
            vec![
                DailyClicks {
                    date: date(2026, 8, 1),
                    count: 2
                },
                DailyClicks {
                    date: date(2026, 8, 2),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_clicks_by_date_zero_clicks_is_empty_not_error() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        let link = test_link(10, "abc12345", 1);
        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        click_repo
            .expect_find_by_link_and_range()
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let result = service
            .clicks_by_date(
                "abc12345",
                &test_owner(1),
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap(),
            )
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_clicks_by_date_unknown_code_is_not_found() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        click_repo.expect_find_by_link_and_range().times(0);

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let result = service
            .clicks_by_date(
                "missing1",
                &test_owner(1),
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_clicks_by_date_foreign_link_is_not_found() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        // Link exists but belongs to account 2, caller is account 1.
        let link = test_link(10, "theirs01", 2);
        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));
        click_repo.expect_find_by_link_and_range().times(0);

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let result = service
            .clicks_by_date(
                "theirs01",
                &test_owner(1),
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_total_clicks_by_owner_half_open_bounds() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        link_repo
            .expect_find_by_owner()
            .withf(|&id| id == 1)
            .times(1)
            .returning(|account_id| {
                Ok(vec![
                    test_link(10, "first001", account_id),
                    test_link(11, "second02", account_id),
                ])
            });

        let expected_from = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let expected_to = Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap();

        click_repo
            .expect_find_by_links_and_range()
            .withf(move |ids, &from, &to| {
                ids == [10, 11] && from == expected_from && to == expected_to
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    click_at(10, 2026, 8, 1, 8),
                    click_at(11, 2026, 8, 1, 9),
                    click_at(11, 2026, 8, 2, 10),
                ])
            });

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let result = service
            .total_clicks_by_owner(&test_owner(1), date(2026, 8, 1), date(2026, 8, 2))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[&date(2026, 8, 1)], 2);
        assert_eq!(result[&date(2026, 8, 2)], 1);
    }

    #[tokio::test]
    async fn test_total_clicks_by_owner_no_links() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        link_repo
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(vec![]));
        click_repo.expect_find_by_links_and_range().times(0);

        let service = AnalyticsService::new(Arc::new(link_repo), Arc::new(click_repo));

        let result = service
            .total_clicks_by_owner(&test_owner(1), date(2026, 8, 1), date(2026, 8, 2))
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
