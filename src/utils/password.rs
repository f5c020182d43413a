//! Password hashing with Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hashes a plaintext password with Argon2id and a random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AppError::internal("Failed to hash password", serde_json::json!({}))
        })
}

/// Verifies a plaintext password against a stored Argon2 hash.
///
/// A malformed stored hash counts as a non-match rather than an error, so
/// callers can treat the result uniformly as "credentials valid or not".
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
