//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /graphql`             - GraphQL API (optional Bearer token)
//! - `GET  /graphql`             - GraphiQL IDE
//! - `POST /sso/google/sign-in`  - Google sign-in, returns an auth token
//! - `GET  /r/{alias}`           - Alias redirect (public)
//! - `GET  /health`              - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Optional bearer token on the GraphQL routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with state and tracing applied, without path normalization.
pub fn router(state: AppState) -> Router {
    let graphql_router = api::routes::graphql_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/r/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(graphql_router)
        .merge(api::routes::sso_routes())
        .with_state(state)
        .layer(tracing::layer())
}
