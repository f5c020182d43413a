//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Account credential storage
//! - [`LinkRepository`] - Short link storage and lookup
//! - [`ClickRepository`] - Append-only click events and range queries
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod account_repository;
pub mod click_repository;
pub mod link_repository;

pub use account_repository::AccountRepository;
pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
