//! DTOs for link creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A link record as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub username: String,
}

impl LinkResponse {
    /// Builds the response from a link, the configured base URL, and the
    /// owner's username.
    pub fn from_link(link: Link, base_url: &str, username: &str) -> Self {
        Self {
            id: link.id,
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), link.code),
            code: link.code,
            original_url: link.long_url,
            click_count: link.click_count,
            created_at: link.created_at,
            username: username.to_string(),
        }
    }
}
