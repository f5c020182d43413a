//! DTOs for registration and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Account;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is mandatory"))]
    pub username: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Request to log in with existing credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is mandatory"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is mandatory"))]
    pub password: String,
}

/// Public view of a registered account. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            email: account.email,
            role: account.role,
            created_at: account.created_at,
        }
    }
}

/// Bearer token issued on successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "pw12345678".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "short".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "pw12345678".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_account_response_omits_hash() {
        let json = serde_json::to_value(AccountResponse {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        })
        .unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
