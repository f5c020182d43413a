//! Business logic services for the application layer.

pub mod analytics_service;
pub mod auth_service;
pub mod link_service;
pub mod token_service;

pub use analytics_service::{AnalyticsService, DailyClicks};
pub use auth_service::{AuthService, IssuedToken};
pub use link_service::LinkService;
pub use token_service::{Claims, TokenService};
