//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Url`] - An alias mapped to a long link
//! - [`User`] - An account identified by email
//! - [`SsoUser`] - A profile returned by the identity provider
//! - [`UserUrlRelation`] - Ownership of a URL by a user

pub mod relation;
pub mod url;
pub mod user;

pub use relation::UserUrlRelation;
pub use url::Url;
pub use user::{SsoUser, User};
