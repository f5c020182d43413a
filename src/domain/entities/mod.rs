//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, paired with
//! `New*` input structs for creation:
//!
//! - [`Account`] - A registered user owning links
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - A click event on a shortened link

pub mod account;
pub mod click;
pub mod link;

pub use account::{Account, DEFAULT_ROLE, NewAccount};
pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
