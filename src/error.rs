//! Application error type shared by every layer.
//!
//! Use cases return [`AppError`]; REST handlers turn it into a JSON response via
//! [`IntoResponse`], and GraphQL resolvers translate it into
//! [`crate::api::graphql::ApiError`].

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description returned to REST clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Typed failure of a use case or repository call.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The alias (or user) does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The alias is already taken.
    #[error("{message}")]
    AliasExist { message: String, details: Value },

    /// The alias violates the format rules.
    #[error("{message}")]
    InvalidAlias { message: String, details: Value },

    /// The target URL is not an absolute http(s) URL.
    #[error("{message}")]
    InvalidLongLink { message: String, details: Value },

    /// The caller is not authenticated or the credentials are invalid.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// Request payload failed validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Anything else: database failures, identity provider failures.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn alias_exist(message: impl Into<String>, details: Value) -> Self {
        Self::AliasExist {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_alias(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidAlias {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_long_link(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidLongLink {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message.as_str(), details)
            }
            AppError::AliasExist { message, details } => {
                (StatusCode::CONFLICT, "alias_exist", message.as_str(), details)
            }
            AppError::InvalidAlias { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_alias", message.as_str(), details)
            }
            AppError::InvalidLongLink { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_long_link",
                message.as_str(),
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message.as_str(), details)
            }
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.as_str(),
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message.as_str(),
                details,
            ),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Converts the error into its serializable description.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        if status == StatusCode::UNAUTHORIZED {
            return (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

/// Every database failure is `Internal` here. Repositories map the
/// constraint violations they expect before falling back to this.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "fields": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::alias_exist("x", json!({})).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::invalid_alias("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x", json!({})).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::invalid_alias("Alias is too long", json!({ "max": 50 }));
        assert_eq!(err.to_string(), "Alias is too long");
    }

    #[test]
    fn test_error_info() {
        let info = AppError::alias_exist("taken", json!({ "alias": "abc" })).to_error_info();
        assert_eq!(info.code, "alias_exist");
        assert_eq!(info.message, "taken");
        assert_eq!(info.details["alias"], "abc");
    }

    #[test]
    fn test_unauthorized_response_has_challenge_header() {
        let response = AppError::unauthorized("no", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
