//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - Account storage and lookup
//! - [`PgLinkRepository`] - Link storage and code resolution
//! - [`PgClickRepository`] - Append-only click events and range queries

pub mod pg_account_repository;
pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
