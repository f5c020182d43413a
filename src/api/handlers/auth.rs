//! Handlers for account registration and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{AccountResponse, LoginRequest, RegisterRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register` (public)
///
/// # Errors
///
/// Returns 400 with field-level details for invalid input, 409 if the
/// username or email is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    payload.validate()?;

    let account = state
        .auth_service
        .register(payload.username, payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Verifies credentials and returns a bearer token.
///
/// # Endpoint
///
/// `POST /login` (public)
///
/// # Errors
///
/// Returns 401 for bad credentials; the response does not distinguish an
/// unknown username from a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let issued = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        token_type: "Bearer",
        expires_in: issued.expires_in,
    }))
}
