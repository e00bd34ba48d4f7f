// In memory implementation of the IdentityProvider port.
//
// Purpose
// - Local development and tests without the hosted identity service.
//
// Responsibilities
// - Keep accounts keyed by lowercased email with a salted SHA-256 password digest.
// - Issue opaque session tokens and forget them on sign out.

use crate::shared::infrastructure::identity::{IdentityError, IdentityProvider, Session};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    email: String,
    salt: String,
    password_digest: String,
}

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, Session>>,
    is_offline: bool,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), IdentityError> {
        if self.is_offline {
            return Err(IdentityError::Backend("identity provider offline".into()));
        }
        Ok(())
    }

    async fn open_session(&self, account: &Account) -> Session {
        let session = Session {
            access_token: Uuid::new_v4().simple().to_string(),
            user_id: account.user_id.clone(),
            email: account.email.clone(),
        };
        self.sessions
            .write()
            .await
            .insert(session.access_token.clone(), session.clone());
        session
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.ensure_online()?;
        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(IdentityError::InvalidInput("email is not valid".into()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(IdentityError::InvalidInput(format!(
                "password must have at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let account = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&email) {
                return Err(IdentityError::EmailTaken(email));
            }
            let salt = Uuid::new_v4().simple().to_string();
            let account = Account {
                user_id: Uuid::now_v7().to_string(),
                email: email.clone(),
                password_digest: digest(&salt, password),
                salt,
            };
            accounts.insert(email, account.clone());
            account
        };
        Ok(self.open_session(&account).await)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.ensure_online()?;
        let account = self
            .accounts
            .read()
            .await
            .get(&normalize_email(email))
            .cloned()
            .ok_or(IdentityError::InvalidCredentials)?;
        if digest(&account.salt, password) != account.password_digest {
            return Err(IdentityError::InvalidCredentials);
        }
        Ok(self.open_session(&account).await)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.ensure_online()?;
        self.sessions.write().await.remove(access_token);
        Ok(())
    }

    async fn current_session(&self, access_token: &str) -> Result<Option<Session>, IdentityError> {
        self.ensure_online()?;
        Ok(self.sessions.read().await.get(access_token).cloned())
    }
}
