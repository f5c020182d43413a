//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, AuthService, LinkService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::RedirectCache;
use crate::infrastructure::persistence::{
    PgAccountRepository, PgClickRepository, PgLinkRepository,
};

/// Immutable application state shared across all requests.
///
/// Cloning is cheap (everything is behind an `Arc` or a channel handle).
/// Durable state lives behind the repositories; nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService<PgAccountRepository>>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgLinkRepository, PgClickRepository>>,
    pub cache: Arc<dyn RedirectCache>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Base URL prepended to short codes in API responses.
    pub base_url: String,
}
