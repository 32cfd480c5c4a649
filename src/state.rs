//! Shared application state injected into every handler.

use std::sync::Arc;

use reqwest::Client;
use sqlx::PgPool;

use crate::api::graphql::{ShortSchema, build_schema};
use crate::application::services::{
    AuthService, Authenticator, CreatorService, ModifierService, RetrieverService, SingleSignOn,
    SsoService, UrlCreator, UrlModifier, UrlRetriever,
};
use crate::config::Config;
use crate::domain::repositories::HealthRepository;
use crate::infrastructure::persistence::{
    PgHealthRepository, PgUrlRepository, PgUserRepository, PgUserUrlRelationRepository,
};
use crate::infrastructure::sso::GoogleAccount;

/// Use cases the HTTP layer talks to.
///
/// Held as trait objects so tests can build the router over any
/// repository implementation.
#[derive(Clone)]
pub struct Services {
    pub url_creator: Arc<dyn UrlCreator>,
    pub url_modifier: Arc<dyn UrlModifier>,
    pub url_retriever: Arc<dyn UrlRetriever>,
    pub authenticator: Arc<dyn Authenticator>,
    pub single_sign_on: Arc<dyn SingleSignOn>,
    pub health: Arc<dyn HealthRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub url_retriever: Arc<dyn UrlRetriever>,
    pub authenticator: Arc<dyn Authenticator>,
    pub single_sign_on: Arc<dyn SingleSignOn>,
    pub health: Arc<dyn HealthRepository>,
    pub schema: ShortSchema,
}

impl AppState {
    /// Builds the state and the GraphQL schema from the given use cases.
    pub fn new(services: Services) -> Self {
        let schema = build_schema(
            services.url_creator,
            services.url_modifier,
            services.url_retriever.clone(),
        );

        Self {
            url_retriever: services.url_retriever,
            authenticator: services.authenticator,
            single_sign_on: services.single_sign_on,
            health: services.health,
            schema,
        }
    }

    /// Wires the PostgreSQL repositories and the Google account adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth token TTL is out of range.
    pub fn from_pool(pool: Arc<PgPool>, http: Client, config: &Config) -> anyhow::Result<Self> {
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let relation_repository = Arc::new(PgUserUrlRelationRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let google_account = Arc::new(GoogleAccount::with_userinfo_url(
            http,
            config.google_userinfo_url.clone(),
        ));

        Ok(Self::new(Services {
            url_creator: Arc::new(CreatorService::new(
                url_repository.clone(),
                relation_repository.clone(),
            )),
            url_modifier: Arc::new(ModifierService::new(
                url_repository.clone(),
                relation_repository.clone(),
            )),
            url_retriever: Arc::new(RetrieverService::new(url_repository, relation_repository)),
            authenticator: Arc::new(AuthService::new(
                user_repository.clone(),
                config.auth_signing_secret.clone(),
                config.auth_token_ttl()?,
            )),
            single_sign_on: Arc::new(SsoService::new(google_account, user_repository)),
            health: Arc::new(PgHealthRepository::new(pool)),
        }))
    }
}
