//! Use cases of the application layer.
//!
//! Each use case is a trait (the capability handlers depend on) with one
//! implementation generic over the repositories it orchestrates.

pub mod auth_service;
pub mod sso_service;
pub mod url_creator;
pub mod url_modifier;
pub mod url_retriever;

pub use auth_service::{AuthService, Authenticator};
pub use sso_service::{SingleSignOn, SsoService};
pub use url_creator::{CreatorService, UrlCreator};
pub use url_modifier::{ModifierService, UrlModifier};
pub use url_retriever::{RetrieverService, UrlRetriever};

#[cfg(test)]
pub use auth_service::MockAuthenticator;
#[cfg(test)]
pub use sso_service::MockSingleSignOn;
#[cfg(test)]
pub use url_creator::MockUrlCreator;
#[cfg(test)]
pub use url_modifier::MockUrlModifier;
#[cfg(test)]
pub use url_retriever::MockUrlRetriever;
