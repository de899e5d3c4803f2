use crate::modules::accounts::adapters::outbound::profile_store::{
    Profile, ProfileStore, ProfileStoreError,
};
use crate::modules::accounts::core::session::Role;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
    offline: bool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Role changes happen out of band (database console) in production.
    pub async fn set_role(&self, user_id: &str, role: Option<Role>) -> Result<(), ProfileStoreError> {
        self.with_profile(user_id, |profile| profile.role = role).await
    }

    async fn with_profile(
        &self,
        user_id: &str,
        change: impl FnOnce(&mut Profile),
    ) -> Result<(), ProfileStoreError> {
        self.ensure_online()?;
        let mut guard = self.profiles.write().await;
        let profile = guard
            .get_mut(user_id)
            .ok_or_else(|| ProfileStoreError::NotFound(user_id.to_string()))?;
        change(profile);
        Ok(())
    }

    fn ensure_online(&self) -> Result<(), ProfileStoreError> {
        if self.offline {
            return Err(ProfileStoreError::Backend("Profile store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find(&self, user_id: &str) -> Result<Option<Profile>, ProfileStoreError> {
        self.ensure_online()?;
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn create_default(
        &self,
        user_id: &str,
        email: &str,
    ) -> Result<Profile, ProfileStoreError> {
        self.ensure_online()?;
        let profile = Profile {
            user_id: user_id.to_string(),
            email: email.to_string(),
            role: Some(Role::Client),
            phone: None,
            instagram_username: None,
        };
        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), profile.clone());
        Ok(profile)
    }

    async fn update_phone(&self, user_id: &str, phone: &str) -> Result<(), ProfileStoreError> {
        let phone = phone.to_string();
        self.with_profile(user_id, |profile| profile.phone = Some(phone))
            .await
    }

    async fn update_instagram_username(
        &self,
        user_id: &str,
        username: Option<&str>,
    ) -> Result<(), ProfileStoreError> {
        let username = username.map(str::to_string);
        self.with_profile(user_id, |profile| profile.instagram_username = username)
            .await
    }
}
