// Port for the identity provider that owns sign in and sessions.
//
// Purpose
// - Resolve a bearer token to the signed-in user so rows can be tagged with an owner.

pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account for {0} already exists")]
    EmailTaken(String),

    #[error("invalid sign up input: {0}")]
    InvalidInput(String),

    #[error("identity backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
    async fn current_session(&self, access_token: &str) -> Result<Option<Session>, IdentityError>;
}
