//! Background worker that persists click events.
//!
//! Drains the click channel filled by the redirect handler. For each event
//! the worker resolves the link, appends one click row, and bumps the
//! link's running click count. Failures are logged and scoped to the single
//! event; the worker itself runs until the channel closes.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::{ClickRepository, LinkRepository};

/// Runs the click recording loop until the sender side is dropped.
pub async fn run_click_worker<L, C>(
    mut rx: mpsc::Receiver<ClickEvent>,
    link_repository: Arc<L>,
    click_repository: Arc<C>,
) where
    L: LinkRepository,
    C: ClickRepository,
{
    while let Some(event) = rx.recv().await {
        let link = match link_repository.find_by_code(&event.code).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                // The link can vanish between resolution and recording only
                // if rows are removed out of band; log and move on.
                warn!("Dropping click for unknown code {}", event.code);
                continue;
            }
            Err(e) => {
                warn!("Failed to resolve link for click on {}: {}", event.code, e);
                continue;
            }
        };

        if let Err(e) = click_repository
            .record_click(NewClick { link_id: link.id })
            .await
        {
            warn!("Failed to record click for {}: {}", event.code, e);
            continue;
        }

        if let Err(e) = link_repository.increment_click_count(link.id).await {
            warn!("Failed to bump click count for {}: {}", event.code, e);
            continue;
        }

        debug!("Recorded click for {}", event.code);
    }

    debug!("Click worker stopped: channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Link};
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::Utc;

    fn test_link(id: i64, code: &str) -> Link {
        Link {
            id,
            code: code.to_string(),
            long_url: "https://example.com/".to_string(),
            account_id: 1,
            click_count: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_worker_records_click_and_bumps_count() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        let link = test_link(10, "abc12345");
        link_repo
            .expect_find_by_code()
            .withf(|code| code == "abc12345")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        click_repo
            .expect_record_click()
            .withf(|new_click| new_click.link_id == 10)
            .times(1)
            .returning(|_| {
                Ok(Click {
                    id: 1,
                    link_id: 10,
                    clicked_at: Utc::now(),
                })
            });

        link_repo
            .expect_increment_click_count()
            .withf(|&id| id == 10)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(ClickEvent::new("abc12345")).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(link_repo), Arc::new(click_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_skips_unknown_code() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        click_repo.expect_record_click().times(0);
        link_repo.expect_increment_click_count().times(0);

        let (tx, rx) = mpsc::channel(8);
        tx.send(ClickEvent::new("gone1234")).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(link_repo), Arc::new(click_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_survives_record_failure() {
        let mut link_repo = MockLinkRepository::new();
        let mut click_repo = MockClickRepository::new();

        let first = test_link(1, "fail0001");
        let second = test_link(2, "pass0002");

        link_repo
            .expect_find_by_code()
            .withf(|code| code == "fail0001")
            .times(1)
            .returning(move |_| Ok(Some(first.clone())));
        link_repo
            .expect_find_by_code()
            .withf(|code| code == "pass0002")
            .times(1)
            .returning(move |_| Ok(Some(second.clone())));

        click_repo
            .expect_record_click()
            .withf(|new_click| new_click.link_id == 1)
            .times(1)
            .returning(|_| {
                Err(crate::error::AppError::internal(
                    "Database error",
                    serde_json::json!({}),
                ))
            });
        click_repo
            .expect_record_click()
            .withf(|new_click| new_click.link_id == 2)
            .times(1)
            .returning(|_| {
                Ok(Click {
                    id: 5,
                    link_id: 2,
                    clicked_at: Utc::now(),
                })
            });

        link_repo
            .expect_increment_click_count()
            .withf(|&id| id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(ClickEvent::new("fail0001")).await.unwrap();
        tx.send(ClickEvent::new("pass0002")).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(link_repo), Arc::new(click_repo)).await;
    }
}
