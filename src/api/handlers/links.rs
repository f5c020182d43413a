//! Handlers for link creation and owner listing.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::links::{LinkResponse, ShortenRequest};
use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link owned by the authenticated account.
///
/// # Endpoint
///
/// `POST /links` (authenticated)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 for an invalid URL, 500 if code generation keeps colliding
/// (retriable).
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url, &account)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(
            link,
            &state.base_url,
            &account.username,
        )),
    ))
}

/// Lists the authenticated account's links, most recent first.
///
/// # Endpoint
///
/// `GET /my-links` (authenticated)
pub async fn my_links_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_by_owner(&account).await?;

    let response = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.base_url, &account.username))
        .collect();

    Ok(Json(response))
}
