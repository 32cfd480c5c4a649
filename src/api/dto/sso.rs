//! DTOs for single sign-on endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Access token obtained by the client from the identity provider.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "access_token must not be empty"))]
    pub access_token: String,
}

/// Auth token to send as `Authorization: Bearer <auth_token>` on GraphQL requests.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub auth_token: String,
    pub email: String,
    pub name: Option<String>,
}
