//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Short-code uniqueness is enforced here, at insert time, via the store's
/// unique constraint. Callers must treat a code-collision conflict as
/// retriable (see [`crate::application::services::LinkService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] (constraint `links_code_key` in the
    /// details) if the short code already exists — the insert is the
    /// atomic uniqueness check, so two concurrent creations with the same
    /// code cannot both succeed.
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links owned by an account, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner(&self, account_id: i64) -> Result<Vec<Link>, AppError>;

    /// Increments a link's running click count by one.
    ///
    /// Called only by the click recorder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click_count(&self, link_id: i64) -> Result<(), AppError>;
}
