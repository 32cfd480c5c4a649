//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by the PostgreSQL
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL storage keyed by alias
//! - [`UserUrlRelationRepository`] - Ownership links between users and URLs
//! - [`UserRepository`] - User accounts
//! - [`HealthRepository`] - Storage connectivity probe
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod health_repository;
pub mod url_repository;
pub mod user_repository;
pub mod user_url_relation_repository;

pub use health_repository::HealthRepository;
pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;
pub use user_url_relation_repository::UserUrlRelationRepository;

#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use user_url_relation_repository::MockUserUrlRelationRepository;
