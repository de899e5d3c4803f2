use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("an account already exists for {0}")]
    EmailTaken(String),

    #[error("user {0} is not signed in")]
    NotSignedIn(String),

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Credential checks and account management, delegated to the hosted auth
/// service. Every call names the user it acts for, so one provider serves
/// any number of concurrent clients.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError>;
    async fn sign_out(&self, user_id: &str) -> Result<(), IdentityError>;
    async fn update_password(&self, user_id: &str, new_password: &str)
    -> Result<(), IdentityError>;
    async fn find_user(&self, user_id: &str) -> Result<Option<IdentityUser>, IdentityError>;
}
