//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /r/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist or has expired.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.url_retriever.get_url(&alias, None).await?;

    tracing::debug!(alias = %alias, target = %url.original_url, "Redirecting");

    Ok(Redirect::temporary(&url.original_url))
}
