//! API route configuration.
//!
//! Protected routes require Bearer token authentication via
//! [`crate::api::middleware::auth`]; public routes do not.

use crate::api::handlers::{
    create_link_handler, link_analytics_handler, login_handler, my_links_handler,
    register_handler, total_clicks_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without authentication.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Routes gated behind the bearer-token guard.
///
/// # Endpoints
///
/// - `POST /links`                    - Shorten a URL
/// - `GET  /my-links`                 - List the caller's links
/// - `GET  /my-links/analytics`       - Per-day click totals across the caller's links
/// - `GET  /links/{code}/analytics`   - Per-day clicks for one link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/my-links", get(my_links_handler))
        .route("/my-links/analytics", get(total_clicks_handler))
        .route("/links/{code}/analytics", get(link_analytics_handler))
}
