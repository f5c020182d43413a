//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`   - Short link redirect (public)
//! - `GET  /health`   - Health check: DB, cache, click queue (public)
//! - `POST /register`, `POST /login` - Account endpoints (public)
//! - `POST /links`, `GET /my-links`, `GET /my-links/analytics`,
//!   `GET /links/{code}/analytics` - Owner endpoints (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token guard on owner endpoints only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes (`/health`, `/register`, ...) take precedence over the
/// `/{code}` wildcard, so no generated code can shadow them.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
