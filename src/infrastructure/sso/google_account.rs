//! Google OpenID Connect account adapter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::SsoUser;
use crate::domain::sso::SingleSignOnAccount;
use crate::error::AppError;

/// Google's OpenID Connect userinfo endpoint.
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Userinfo response body. Fields Google leaves out decode as empty strings.
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    sub: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

/// Fetches Google profiles with OAuth access tokens.
pub struct GoogleAccount {
    client: Client,
    userinfo_url: String,
}

impl GoogleAccount {
    /// Creates an adapter calling [`GOOGLE_USERINFO_URL`].
    pub fn new(client: Client) -> Self {
        Self::with_userinfo_url(client, GOOGLE_USERINFO_URL)
    }

    /// Creates an adapter calling a custom userinfo endpoint.
    pub fn with_userinfo_url(client: Client, userinfo_url: impl Into<String>) -> Self {
        Self {
            client,
            userinfo_url: userinfo_url.into(),
        }
    }
}

#[async_trait]
impl SingleSignOnAccount for GoogleAccount {
    async fn get_single_sign_on_user(&self, access_token: &str) -> Result<SsoUser, AppError> {
        tracing::debug!(url = %self.userinfo_url, "Fetching Google userinfo");

        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Google userinfo request failed");
                AppError::internal(
                    "Identity provider request failed",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!(status = %status, "Google userinfo rejected the token");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Identity provider rejected the access token" }),
            ));
        }
        if !status.is_success() {
            tracing::warn!(status = %status, "Google userinfo request failed");
            return Err(AppError::internal(
                "Identity provider request failed",
                json!({ "status": status.as_u16() }),
            ));
        }

        let body: UserInfoResponse = response.json().await.map_err(|e| {
            AppError::internal(
                "Identity provider returned an invalid profile",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(SsoUser {
            id: body.sub,
            name: body.name,
            email: body.email,
        })
    }
}
