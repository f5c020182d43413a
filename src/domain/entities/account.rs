//! Account entity representing a registered user.

use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

/// Default role assigned at registration.
pub const DEFAULT_ROLE: &str = "user";

/// A registered account that owns shortened links.
///
/// Identity fields (`username`, `email`) are immutable after registration.
/// The password is stored only as an Argon2id hash.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Returns the account's roles as a list.
    ///
    /// The role column stores a single tag today; this keeps the token
    /// claim shape stable if more roles are added later.
    pub fn roles(&self) -> Vec<String> {
        self.role
            .split(',')
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account_with_role(role: &str) -> Account {
        Account {
            id: 1,
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_single_role() {
        let account = account_with_role(DEFAULT_ROLE);
        assert_eq!(account.roles(), vec!["user".to_string()]);
    }

    #[test]
    fn test_multiple_roles_split() {
        let account = account_with_role("user,admin");
        assert_eq!(
            account.roles(),
            vec!["user".to_string(), "admin".to_string()]
        );
    }

    #[test]
    fn test_empty_role_yields_no_roles() {
        let account = account_with_role("");
        assert!(account.roles().is_empty());
    }
}
