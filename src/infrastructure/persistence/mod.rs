//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL storage and retrieval
//! - [`PgUserUrlRelationRepository`] - Ownership links
//! - [`PgUserRepository`] - User accounts
//! - [`PgHealthRepository`] - Connectivity probe

pub mod pg_health_repository;
pub mod pg_url_repository;
pub mod pg_user_repository;
pub mod pg_user_url_relation_repository;

pub use pg_health_repository::PgHealthRepository;
pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_user_url_relation_repository::PgUserUrlRelationRepository;
