//! Domain layer containing business entities and contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and identity provider traits define contracts
//! implemented by the infrastructure layer; business logic lives in
//! [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`sso`] - Identity provider contract

pub mod entities;
pub mod repositories;
pub mod sso;
