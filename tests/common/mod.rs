#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use short::application::services::{
    AuthService, CreatorService, ModifierService, RetrieverService, SsoService,
};
use short::domain::entities::{SsoUser, Url, User, UserUrlRelation};
use short::domain::repositories::{
    HealthRepository, UrlRepository, UserRepository, UserUrlRelationRepository,
};
use short::domain::sso::SingleSignOnAccount;
use short::error::AppError;
use short::state::{AppState, Services};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

#[derive(Default)]
struct Tables {
    urls: HashMap<String, Url>,
    users: HashMap<String, User>,
    relations: BTreeSet<(String, String)>,
}

/// In-memory stand-in for the three tables.
///
/// Renaming a URL re-points its relations, like the foreign key does.
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    pub healthy: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::default(),
            healthy: Mutex::new(true),
        }
    }

    pub fn insert_user(&self, user: User) {
        let mut tables = self.tables.lock().unwrap();
        tables.users.insert(user.email.clone(), user);
    }

    pub fn insert_url(&self, owner: &str, url: Url) {
        let mut tables = self.tables.lock().unwrap();
        tables
            .relations
            .insert((owner.to_string(), url.alias.clone()));
        tables.urls.insert(url.alias.clone(), url);
    }

    pub fn url(&self, alias: &str) -> Option<Url> {
        self.tables.lock().unwrap().urls.get(alias).cloned()
    }

    pub fn user(&self, email: &str) -> Option<User> {
        self.tables.lock().unwrap().users.get(email).cloned()
    }

    pub fn owners_of(&self, alias: &str) -> Vec<String> {
        self.tables
            .lock()
            .unwrap()
            .relations
            .iter()
            .filter(|(_, a)| a == alias)
            .map(|(email, _)| email.clone())
            .collect()
    }
}

#[async_trait]
impl UrlRepository for InMemoryStore {
    async fn is_alias_exist(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self.tables.lock().unwrap().urls.contains_key(alias))
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Url, AppError> {
        self.url(alias)
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "alias": alias })))
    }

    async fn get_by_aliases(&self, aliases: &[String]) -> Result<Vec<Url>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(aliases
            .iter()
            .filter_map(|alias| tables.urls.get(alias).cloned())
            .collect())
    }

    async fn create(&self, url: &Url) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.urls.contains_key(&url.alias) {
            return Err(AppError::alias_exist("Unique constraint violation", json!({})));
        }
        tables.urls.insert(url.alias.clone(), url.clone());
        Ok(())
    }

    async fn update(&self, old_alias: &str, url: &Url) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.urls.contains_key(old_alias) {
            return Err(AppError::not_found("URL not found", json!({ "alias": old_alias })));
        }
        if url.alias != old_alias && tables.urls.contains_key(&url.alias) {
            return Err(AppError::alias_exist("Unique constraint violation", json!({})));
        }

        tables.urls.remove(old_alias);
        tables.urls.insert(url.alias.clone(), url.clone());

        let moved: Vec<(String, String)> = tables
            .relations
            .iter()
            .filter(|(_, alias)| alias == old_alias)
            .cloned()
            .collect();
        for (email, alias) in moved {
            tables.relations.remove(&(email.clone(), alias));
            tables.relations.insert((email, url.alias.clone()));
        }

        Ok(())
    }
}

#[async_trait]
impl UserUrlRelationRepository for InMemoryStore {
    async fn create_relation(&self, user: &User, url: &Url) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .relations
            .insert((user.email.clone(), url.alias.clone()));
        Ok(())
    }

    async fn update_relation(
        &self,
        user: &User,
        old_alias: &str,
        url: &Url,
    ) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .relations
            .remove(&(user.email.clone(), old_alias.to_string()))
        {
            tables
                .relations
                .insert((user.email.clone(), url.alias.clone()));
        }
        Ok(())
    }

    async fn is_owner(&self, user: &User, alias: &str) -> Result<bool, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .relations
            .contains(&(user.email.clone(), alias.to_string())))
    }

    async fn find_by_user(&self, user: &User) -> Result<Vec<UserUrlRelation>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .relations
            .iter()
            .filter(|(email, _)| *email == user.email)
            .map(|(email, alias)| UserUrlRelation {
                user_email: email.clone(),
                url_alias: alias.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.user(email))
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.contains_key(&user.email) {
            return Err(AppError::internal("User already exists", json!({})));
        }
        tables.users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn update_sso_id(&self, email: &str, sso_id: &str) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .get_mut(email)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))?;
        user.google_sso_id = Some(sso_id.to_string());
        Ok(())
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    async fn ping(&self) -> Result<String, AppError> {
        if *self.healthy.lock().unwrap() {
            Ok("in-memory".to_string())
        } else {
            Err(AppError::internal("Database error", json!({})))
        }
    }
}

/// Identity provider answering every access token with the same profile,
/// or with the error it was built with.
pub struct FakeAccount {
    profile: Option<SsoUser>,
    reject_token: bool,
}

impl FakeAccount {
    pub fn returning(id: &str, name: &str, email: &str) -> Self {
        Self {
            profile: Some(SsoUser {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            }),
            reject_token: false,
        }
    }

    /// Provider that is down.
    pub fn failing() -> Self {
        Self {
            profile: None,
            reject_token: false,
        }
    }

    /// Provider that refuses the access token.
    pub fn rejecting() -> Self {
        Self {
            profile: None,
            reject_token: true,
        }
    }
}

#[async_trait]
impl SingleSignOnAccount for FakeAccount {
    async fn get_single_sign_on_user(&self, _access_token: &str) -> Result<SsoUser, AppError> {
        if self.reject_token {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Identity provider rejected the access token" }),
            ));
        }
        self.profile.clone().ok_or_else(|| {
            AppError::internal("Identity provider request failed", json!({ "status": 503 }))
        })
    }
}

pub fn create_test_state(account: FakeAccount) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());

    let state = AppState::new(Services {
        url_creator: Arc::new(CreatorService::new(store.clone(), store.clone())),
        url_modifier: Arc::new(ModifierService::new(store.clone(), store.clone())),
        url_retriever: Arc::new(RetrieverService::new(store.clone(), store.clone())),
        authenticator: Arc::new(AuthService::new(
            store.clone(),
            TEST_SIGNING_SECRET.to_string(),
            chrono::Duration::days(7),
        )),
        single_sign_on: Arc::new(SsoService::new(Arc::new(account), store.clone())),
        health: store.clone(),
    });

    (state, store)
}

/// Registers `email` and returns a bearer token for it.
pub fn sign_up(state: &AppState, store: &InMemoryStore, email: &str) -> String {
    let user = User::with_email(email);
    store.insert_user(user.clone());
    state.authenticator.issue_token(&user).unwrap()
}

pub fn stored_url(alias: &str, original_url: &str) -> Url {
    Url {
        created_at: Some(chrono::Utc::now()),
        ..Url::new(alias.to_string(), original_url.to_string(), None)
    }
}
