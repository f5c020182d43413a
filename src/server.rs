//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum server lifecycle.

use crate::application::services::{AnalyticsService, AuthService, LinkService, TokenService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::{NullCache, RedirectCache, RedisCache};
use crate::infrastructure::persistence::{
    PgAccountRepository, PgClickRepository, PgLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache (or NullCache fallback)
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn RedirectCache> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let pool = Arc::new(pool);
    let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(
        click_rx,
        link_repository.clone(),
        click_repository.clone(),
    ));
    tracing::info!("Click worker started");

    let token_service = Arc::new(TokenService::new(
        &config.token_signing_secret,
        config.token_lifetime_seconds,
    ));

    let state = AppState {
        db: pool,
        auth_service: Arc::new(AuthService::new(account_repository, token_service)),
        link_service: Arc::new(LinkService::new(link_repository.clone())),
        analytics_service: Arc::new(AnalyticsService::new(link_repository, click_repository)),
        cache,
        click_sender: click_tx,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
