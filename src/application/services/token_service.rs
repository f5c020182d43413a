//! Stateless bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a single shared secret. Nothing is
//! persisted server-side; validity is determined purely by signature and
//! expiry at verification time.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Claims embedded in issued tokens.
///
/// `roles` is a comma-joined list so the claim stays a flat string.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Splits the comma-joined role claim back into a list.
    pub fn role_list(&self) -> Vec<String> {
        self.roles
            .split(',')
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Service for issuing and verifying signed bearer tokens.
///
/// Holds the only copy of the signing key material; loaded once at startup.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_seconds: i64,
}

impl TokenService {
    /// Creates a token service from the shared secret and token lifetime.
    pub fn new(secret: &str, lifetime_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime_seconds: lifetime_seconds as i64,
        }
    }

    /// Issues a token for the given subject and roles.
    ///
    /// Expiry is issued-at plus the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue(&self, username: &str, roles: &[String]) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            roles: roles.join(","),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.lifetime_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token encoding failed: {}", e);
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies a token's signature and expiry, returning its claims.
    ///
    /// Malformed structure, bad signature, and expiry are distinct failures
    /// internally (logged at debug level) but all surface as the same
    /// [`AppError::Unauthorized`] so callers leak nothing about the reason.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid token"}))
            })
    }

    /// Configured token lifetime in seconds.
    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }
}
