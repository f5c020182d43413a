//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Account, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Maximum insert attempts before a creation request gives up on finding a
/// free code.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and resolving shortened links.
///
/// Collision policy: codes are generated blindly and inserted; the store's
/// unique constraint is the only uniqueness check. A collision conflict is
/// caught here and retried with a fresh code, bounded at
/// [`MAX_CODE_ATTEMPTS`], after which the request fails explicitly.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link owned by the given account.
    ///
    /// The URL is normalized before storage. Every call creates a fresh
    /// link; submitting the same URL twice yields two codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-HTTP(S) URLs.
    /// Returns [`AppError::Internal`] if [`MAX_CODE_ATTEMPTS`] consecutive
    /// inserts collide, or on database errors.
    pub async fn create_short_link(
        &self,
        long_url: String,
        owner: &Account,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                long_url: normalized_url.clone(),
                account_id: owner.id,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(e) if e.is_code_collision() => {
                    tracing::warn!(
                        "Short code collision on attempt {}/{}",
                        attempt,
                        MAX_CODE_ATTEMPTS
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Lists all links owned by an account, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_by_owner(&self, owner: &Account) -> Result<Vec<Link>, AppError> {
        self.link_repository.find_by_owner(owner.id).await
    }
}
