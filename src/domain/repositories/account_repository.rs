//! Repository trait for account credential storage.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for account records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is already
    /// registered. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Finds an account by its username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Account))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;

    /// Returns true if an account with this username exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError>;

    /// Returns true if an account with this email exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;
}
