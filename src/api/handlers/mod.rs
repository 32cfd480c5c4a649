//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod graphql;
pub mod health;
pub mod redirect;
pub mod sso;

pub use graphql::{graphiql_handler, graphql_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use sso::google_sign_in_handler;
