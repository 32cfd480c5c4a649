//! Optional bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Resolves an `Authorization: Bearer <token>` header into a
/// [`User`](crate::domain::entities::User) request extension.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <auth_token>
/// ```
///
/// Tokens are minted by `POST /sso/google/sign-in`.
///
/// The request is never rejected here. A missing, malformed, forged or
/// expired token leaves it anonymous, and resolvers that need a user fail
/// with `Unauthorized` on their own.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let router = Router::new()
///     .route("/graphql", post(graphql_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let bearer = AuthBearer::from_request_parts(&mut parts, &()).await;

    let mut req = Request::from_parts(parts, body);

    if let Ok(AuthBearer(token)) = bearer {
        match st.authenticator.authenticate(&token).await {
            Ok(user) => {
                tracing::debug!(user = %user.email, "Request authenticated");
                req.extensions_mut().insert(user);
            }
            Err(e @ AppError::Internal { .. }) => {
                tracing::warn!(error = %e, "Token check failed, continuing anonymously");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid bearer token");
            }
        }
    }

    next.run(req).await
}
