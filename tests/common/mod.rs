#![allow(dead_code)]

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use trimlink::application::services::{AnalyticsService, AuthService, LinkService, TokenService};
use trimlink::domain::click_event::ClickEvent;
use trimlink::infrastructure::cache::NullCache;
use trimlink::infrastructure::persistence::{
    PgAccountRepository, PgClickRepository, PgLinkRepository,
};
use trimlink::state::AppState;
use trimlink::utils::password::hash_password;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_PASSWORD: &str = "pw12345678";

/// Inserts an account with the shared test password and returns its id.
pub async fn create_test_account(pool: &PgPool, username: &str, email: &str) -> i64 {
    let password_hash = hash_password(TEST_PASSWORD).unwrap();

    sqlx::query_scalar(
        "INSERT INTO accounts (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a link and returns its id.
pub async fn create_test_link(pool: &PgPool, code: &str, url: &str, account_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (code, long_url, account_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind(account_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a click with an explicit timestamp.
pub async fn create_click_at(pool: &PgPool, link_id: i64, clicked_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO link_clicks (link_id, clicked_at) VALUES ($1, $2)")
        .bind(link_id)
        .bind(clicked_at)
        .execute(pool)
        .await
        .unwrap();
}

/// Builds an AppState over the test pool, returning the click channel
/// receiver so tests can observe emitted click events.
pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let account_repo = Arc::new(PgAccountRepository::new(pool.clone()));
    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repo = Arc::new(PgClickRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::new(TEST_SECRET, 3600));

    let state = AppState {
        db: pool,
        auth_service: Arc::new(AuthService::new(account_repo, token_service)),
        link_service: Arc::new(LinkService::new(link_repo.clone())),
        analytics_service: Arc::new(AnalyticsService::new(link_repo, click_repo)),
        cache: Arc::new(NullCache),
        click_sender: tx,
        base_url: "https://sho.rt".to_string(),
    };

    (state, rx)
}

/// Mints a bearer token the test state's auth service will accept.
pub fn bearer_for(username: &str) -> String {
    let token_service = TokenService::new(TEST_SECRET, 3600);
    let token = token_service
        .issue(username, &["user".to_string()])
        .unwrap();
    format!("Bearer {}", token)
}

/// Full application router (public + protected routes with the auth guard).
pub fn test_app(state: AppState) -> Router {
    trimlink::api::routes::public_routes()
        .merge(
            trimlink::api::routes::protected_routes().route_layer(
                axum::middleware::from_fn_with_state(
                    state.clone(),
                    trimlink::api::middleware::auth::layer,
                ),
            ),
        )
        .route(
            "/{code}",
            axum::routing::get(trimlink::api::handlers::redirect_handler),
        )
        .with_state(state)
}
