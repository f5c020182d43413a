//! Registration, login, and request authentication.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::TokenService;
use crate::domain::entities::{Account, DEFAULT_ROLE, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// A freshly issued bearer token with its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Service for account registration and bearer-token authentication.
///
/// Login failures (unknown username, wrong password) collapse into a single
/// unauthorized outcome so responses do not reveal which check failed.
pub struct AuthService<R: AccountRepository> {
    repository: Arc<R>,
    token_service: Arc<TokenService>,
}

impl<R: AccountRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    /// Registers a new account with the default role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: &str,
    ) -> Result<Account, AppError> {
        if self.repository.exists_by_username(&username).await? {
            return Err(AppError::conflict(
                "Username is already taken",
                json!({ "field": "username" }),
            ));
        }

        if self.repository.exists_by_email(&email).await? {
            return Err(AppError::conflict(
                "Email is already registered",
                json!({ "field": "email" }),
            ));
        }

        let password_hash = hash_password(password)?;

        self.repository
            .create(NewAccount {
                username,
                email,
                password_hash,
                role: DEFAULT_ROLE.to_string(),
            })
            .await
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown username or password
    /// mismatch, with no distinction between the two.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let account = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(Self::bad_credentials)?;

        if !verify_password(password, &account.password_hash) {
            return Err(Self::bad_credentials());
        }

        let token = self
            .token_service
            .issue(&account.username, &account.roles())?;

        Ok(IssuedToken {
            token,
            expires_in: self.token_service.lifetime_seconds(),
        })
    }

    /// Authenticates a bearer token and resolves its subject's account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid/expired or
    /// the subject no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AppError> {
        let claims = self.token_service.verify(token)?;

        self.repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Token subject no longer exists"}),
                )
            })
    }

    fn bad_credentials() -> AppError {
        AppError::unauthorized("Unauthorized", json!({"reason": "Invalid credentials"}))
    }
}
