//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` (public — this is the product's whole point, so it never
/// goes through the auth guard)
///
/// # Request Flow
///
/// 1. Check the cache for the URL
/// 2. On a miss (or cache error), resolve via the database and
///    asynchronously fill the cache
/// 3. Send a click event to the background worker
/// 4. Respond `302 Found` with a `Location` header
///
/// # Click Tracking
///
/// Click events go to a bounded channel, fire-and-forget: a full queue
/// drops the event rather than slowing the redirect.
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = match state.cache.get(&code).await {
        Ok(Some(cached_url)) => cached_url,
        Ok(None) | Err(_) => {
            let link = state.link_service.resolve(&code).await?;

            let cache = state.cache.clone();
            let cache_code = code.clone();
            let url = link.long_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.put(&cache_code, &url, None).await {
                    error!("Failed to cache URL for {}: {}", cache_code, e);
                }
            });

            link.long_url
        }
    };

    let _ = state.click_sender.try_send(ClickEvent::new(code));

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
