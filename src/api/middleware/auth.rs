//! Bearer token authentication middleware.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::entities::Account, error::AppError, state::AppState};

/// The authenticated account, attached to the request by [`layer`].
///
/// Handlers receive this explicitly via `Extension<CurrentAccount>` for
/// ownership checks; there is no ambient security context.
#[derive(Clone)]
pub struct CurrentAccount(pub Arc<Account>);

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header — a missing header
///    or non-Bearer value means "no token presented"
/// 2. Verify signature and expiry, resolve the subject's account
/// 3. Attach the account as a [`CurrentAccount`] request extension
/// 4. Continue to the handler
///
/// A request that fails any step is rejected here and never reaches
/// business logic.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer` per
/// RFC 6750) if the header is missing or malformed, the token is invalid
/// or expired, or the subject no longer exists.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let mut req = Request::from_parts(parts, body);

    let account = st.auth_service.authenticate(&token).await?;
    req.extensions_mut().insert(CurrentAccount(Arc::new(account)));

    Ok(next.run(req).await)
}
