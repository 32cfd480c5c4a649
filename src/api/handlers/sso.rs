//! Handler for single sign-on.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::sso::{SignInRequest, SignInResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a Google access token for an auth token.
///
/// # Endpoint
///
/// `POST /sso/google/sign-in`
///
/// # Request Body
///
/// ```json
/// { "access_token": "ya29.a0Af..." }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "auth_token": "eyJlbWFpbCI6...Ce3f",
///   "email": "googleUser@gmail.com",
///   "name": "Google User"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `access_token` is empty
/// - 401 Unauthorized if Google rejects the access token, shares no email, or
///   the account is linked elsewhere
/// - 500 Internal Server Error if Google fails or is unreachable
pub async fn google_sign_in_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    payload.validate()?;

    let user = state.single_sign_on.sign_in(&payload.access_token).await?;
    let auth_token = state.authenticator.issue_token(&user)?;

    tracing::info!(user = %user.email, "Signed in with Google");

    Ok(Json(SignInResponse {
        auth_token,
        email: user.email,
        name: user.name,
    }))
}
