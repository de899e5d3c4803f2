use crate::modules::accounts::core::session::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub instagram_username: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileStoreError {
    #[error("no profile for user {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find(&self, user_id: &str) -> Result<Option<Profile>, ProfileStoreError>;

    /// Creates the profile of a freshly signed-up user with the `client` role.
    async fn create_default(&self, user_id: &str, email: &str)
    -> Result<Profile, ProfileStoreError>;

    async fn update_phone(&self, user_id: &str, phone: &str) -> Result<(), ProfileStoreError>;

    /// `None` clears the username.
    async fn update_instagram_username(
        &self,
        user_id: &str,
        username: Option<&str>,
    ) -> Result<(), ProfileStoreError>;
}
