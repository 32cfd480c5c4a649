//! API route configuration.

use crate::api::handlers::{google_sign_in_handler, graphiql_handler, graphql_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// GraphQL routes. Bearer authentication is optional on these.
///
/// # Endpoints
///
/// - `POST /graphql` - Execute a query or mutation
/// - `GET  /graphql` - GraphiQL IDE
pub fn graphql_routes() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql_handler).post(graphql_handler))
}

/// Single sign-on routes.
///
/// # Endpoints
///
/// - `POST /sso/google/sign-in` - Exchange a Google access token for an auth token
pub fn sso_routes() -> Router<AppState> {
    Router::new().route("/sso/google/sign-in", post(google_sign_in_handler))
}
