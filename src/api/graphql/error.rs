//! Errors surfaced to GraphQL clients.

use async_graphql::ErrorExtensions;

use crate::error::AppError;

/// Resolver failure carried in the `extensions.code` field of a GraphQL error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("alias already exists")]
    AliasExist,

    #[error("long link is invalid")]
    InvalidLongLink,

    #[error("custom alias is invalid")]
    InvalidCustomAlias,

    #[error("url not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("unknown error")]
    Unknown,
}

impl ApiError {
    /// Machine-readable code placed in `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::AliasExist => "AliasExist",
            ApiError::InvalidLongLink => "InvalidLongLink",
            ApiError::InvalidCustomAlias => "InvalidCustomAlias",
            ApiError::NotFound => "NotFound",
            ApiError::Unauthorized => "Unauthorized",
            ApiError::Unknown => "Unknown",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::AliasExist { .. } => ApiError::AliasExist,
            AppError::InvalidLongLink { .. } => ApiError::InvalidLongLink,
            AppError::InvalidAlias { .. } => ApiError::InvalidCustomAlias,
            AppError::NotFound { .. } => ApiError::NotFound,
            AppError::Unauthorized { .. } => ApiError::Unauthorized,
            AppError::Validation { .. } | AppError::Internal { .. } => {
                tracing::error!(error = %e, details = %e.to_error_info().details, "Resolver failed");
                ApiError::Unknown
            }
        }
    }
}

/// Converts a use case error into an extended GraphQL error.
pub(crate) fn into_graphql(e: AppError) -> async_graphql::Error {
    ApiError::from(e).extend()
}
