//! PostgreSQL implementation of the account repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// PostgreSQL repository for account storage and lookup.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, role, created_at
            "#,
        )
        .bind(&new_account.username)
        .bind(&new_account.email)
        .bind(&new_account.password_hash)
        .bind(&new_account.role)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM accounts WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }
}
