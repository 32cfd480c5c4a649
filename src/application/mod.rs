//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules.
//! They consume domain repository traits and expose use-case traits to the
//! API layer.
//!
//! # Available Services
//!
//! - [`services::url_creator`] - Alias creation for long links
//! - [`services::url_modifier`] - Alias renaming with ownership checks
//! - [`services::url_retriever`] - Alias resolution and per-user listing
//! - [`services::sso_service`] - Google sign-in and account registration
//! - [`services::auth_service`] - Bearer token issuing and verification

pub mod services;
