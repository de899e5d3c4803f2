// In memory implementation of the IdentityProvider port.
//
// Purpose
// - Support gate tests and local development without the hosted auth service.
//
// Responsibilities
// - Keep accounts keyed by email with salted SHA-256 password digests.
// - Track which users hold a live remote session.
// - Run the sign-up trigger that creates the default profile.

use crate::modules::accounts::adapters::outbound::identity_provider::{
    IdentityError, IdentityProvider, IdentityUser,
};
use crate::modules::accounts::adapters::outbound::profile_store::ProfileStore;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

struct Account {
    user_id: String,
    salt: String,
    digest: String,
}

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    signed_in: RwLock<HashSet<String>>,
    signup_trigger: Option<Arc<dyn ProfileStore>>,
    offline: bool,
    sign_out_fails: bool,
    sign_in_calls: AtomicUsize,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default profile of every new account, the job of the
    /// database trigger in the hosted backend.
    pub fn with_signup_trigger(mut self, profiles: Arc<dyn ProfileStore>) -> Self {
        self.signup_trigger = Some(profiles);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn fail_sign_out(&mut self) {
        self.sign_out_fails = true;
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    pub async fn is_signed_in(&self, user_id: &str) -> bool {
        self.signed_in.read().await.contains(user_id)
    }

    pub async fn signed_in_count(&self) -> usize {
        self.signed_in.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), IdentityError> {
        if self.offline {
            return Err(IdentityError::Backend("Identity provider offline".into()));
        }
        Ok(())
    }

    async fn mark_signed_in(&self, user_id: &str) {
        self.signed_in.write().await.insert(user_id.to_string());
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        let email = normalize(email);
        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(&email)
                .ok_or(IdentityError::InvalidCredentials)?;
            if digest(&account.salt, password) != account.digest {
                return Err(IdentityError::InvalidCredentials);
            }
            IdentityUser {
                user_id: account.user_id.clone(),
                email,
            }
        };
        self.mark_signed_in(&user.user_id).await;
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        self.ensure_online()?;
        if password.is_empty() {
            return Err(IdentityError::EmptyPassword);
        }
        let email = normalize(email);
        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&email) {
                return Err(IdentityError::EmailTaken(email));
            }
            let salt = Uuid::now_v7().to_string();
            let account = Account {
                user_id: Uuid::now_v7().to_string(),
                digest: digest(&salt, password),
                salt,
            };
            let user = IdentityUser {
                user_id: account.user_id.clone(),
                email: email.clone(),
            };
            accounts.insert(email, account);
            user
        };
        if let Some(profiles) = &self.signup_trigger {
            profiles
                .create_default(&user.user_id, &user.email)
                .await
                .map_err(|e| IdentityError::Backend(e.to_string()))?;
        }
        self.mark_signed_in(&user.user_id).await;
        Ok(user)
    }

    async fn sign_out(&self, user_id: &str) -> Result<(), IdentityError> {
        if self.sign_out_fails {
            return Err(IdentityError::Backend("sign-out request failed".into()));
        }
        self.signed_in.write().await.remove(user_id);
        Ok(())
    }

    async fn update_password(
        &self,
        user_id: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        self.ensure_online()?;
        if new_password.is_empty() {
            return Err(IdentityError::EmptyPassword);
        }
        if !self.is_signed_in(user_id).await {
            return Err(IdentityError::NotSignedIn(user_id.to_string()));
        }
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|account| account.user_id == user_id)
            .ok_or_else(|| IdentityError::NotSignedIn(user_id.to_string()))?;
        account.salt = Uuid::now_v7().to_string();
        account.digest = digest(&account.salt, new_password);
        Ok(())
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<IdentityUser>, IdentityError> {
        self.ensure_online()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|(_, account)| account.user_id == user_id)
            .map(|(email, account)| IdentityUser {
                user_id: account.user_id.clone(),
                email: email.clone(),
            }))
    }
}

#[cfg(test)]
mod in_memory_identity_provider_tests {
    use super::*;
    use crate::modules::accounts::adapters::outbound::profile_store_in_memory::InMemoryProfileStore;
    use crate::modules::accounts::core::session::Role;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_sign_up_and_sign_in_again() {
        let provider = InMemoryIdentityProvider::new();
        let created = provider.sign_up("Ana@Example.com", "secret").await.unwrap();
        assert_eq!(created.email, "ana@example.com");
        provider.sign_out(&created.user_id).await.unwrap();
        assert!(!provider.is_signed_in(&created.user_id).await);

        let signed_in = provider.sign_in("ana@example.com", "secret").await.unwrap();
        assert_eq!(signed_in, created);
        assert!(provider.is_signed_in(&created.user_id).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_other_users_signed_in_on_sign_out() {
        let provider = InMemoryIdentityProvider::new();
        let ana = provider.sign_up("ana@example.com", "secret").await.unwrap();
        let lucia = provider.sign_up("lucia@example.com", "secret").await.unwrap();

        provider.sign_out(&ana.user_id).await.unwrap();

        assert!(!provider.is_signed_in(&ana.user_id).await);
        assert!(provider.is_signed_in(&lucia.user_id).await);
        assert_eq!(provider.signed_in_count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_wrong_password() {
        let provider = InMemoryIdentityProvider::new();
        provider.sign_up("ana@example.com", "secret").await.unwrap();
        let result = provider.sign_in("ana@example.com", "nope").await;
        assert_eq!(result, Err(IdentityError::InvalidCredentials));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_duplicate_email() {
        let provider = InMemoryIdentityProvider::new();
        provider.sign_up("ana@example.com", "secret").await.unwrap();
        let result = provider.sign_up("ana@example.com", "other").await;
        assert_eq!(
            result,
            Err(IdentityError::EmailTaken("ana@example.com".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_run_the_signup_trigger() {
        let profiles = Arc::new(InMemoryProfileStore::new());
        let provider = InMemoryIdentityProvider::new().with_signup_trigger(profiles.clone());
        let user = provider.sign_up("ana@example.com", "secret").await.unwrap();
        let profile = profiles.find(&user.user_id).await.unwrap().unwrap();
        assert_eq!(profile.role, Some(Role::Client));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_update_the_password_of_a_signed_in_user() {
        let provider = InMemoryIdentityProvider::new();
        let user = provider.sign_up("ana@example.com", "secret").await.unwrap();
        provider
            .update_password(&user.user_id, "new-secret")
            .await
            .unwrap();
        assert_eq!(
            provider.sign_in("ana@example.com", "secret").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert!(provider.sign_in("ana@example.com", "new-secret").await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_update_the_password_of_a_signed_out_user() {
        let provider = InMemoryIdentityProvider::new();
        let user = provider.sign_up("ana@example.com", "secret").await.unwrap();
        provider.sign_out(&user.user_id).await.unwrap();
        assert_eq!(
            provider.update_password(&user.user_id, "new-secret").await,
            Err(IdentityError::NotSignedIn(user.user_id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_users_by_id() {
        let provider = InMemoryIdentityProvider::new();
        let user = provider.sign_up("ana@example.com", "secret").await.unwrap();
        assert_eq!(provider.find_user(&user.user_id).await, Ok(Some(user)));
        assert_eq!(provider.find_user("ghost").await, Ok(None));
    }
}
