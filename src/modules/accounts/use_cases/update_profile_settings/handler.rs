use crate::modules::accounts::adapters::outbound::profile_store::{
    Profile, ProfileStore, ProfileStoreError,
};
use crate::modules::accounts::core::session::{Session, require_admin};
use std::sync::Arc;
use thiserror::Error;

const MAX_INSTAGRAM_USERNAME_LEN: usize = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileSettingsError {
    #[error("admin access required")]
    AccessDenied,

    #[error("no profile for user {0}")]
    NotFound(String),

    #[error("invalid instagram username: {0}")]
    InvalidUsername(String),

    #[error("profile store failed: {0}")]
    Persistence(String),
}

impl From<ProfileStoreError> for ProfileSettingsError {
    fn from(error: ProfileStoreError) -> Self {
        match error {
            ProfileStoreError::NotFound(user_id) => Self::NotFound(user_id),
            other => Self::Persistence(other.to_string()),
        }
    }
}

/// Trims the input and drops a leading `@`. Blank input clears the username.
pub fn normalize_instagram_username(
    raw: Option<&str>,
) -> Result<Option<String>, ProfileSettingsError> {
    let Some(username) = raw
        .map(|r| r.trim().trim_start_matches('@'))
        .filter(|u| !u.is_empty())
    else {
        return Ok(None);
    };
    if username.chars().count() > MAX_INSTAGRAM_USERNAME_LEN {
        return Err(ProfileSettingsError::InvalidUsername(format!(
            "at most {MAX_INSTAGRAM_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
    {
        return Err(ProfileSettingsError::InvalidUsername(
            "only letters, digits, '.' and '_' are allowed".into(),
        ));
    }
    Ok(Some(username.to_string()))
}

/// The admin's own studio settings. Only the Instagram username is editable.
pub struct UpdateProfileSettingsHandler<TProfiles>
where
    TProfiles: ProfileStore + 'static,
{
    profiles: Arc<TProfiles>,
}

impl<TProfiles> UpdateProfileSettingsHandler<TProfiles>
where
    TProfiles: ProfileStore + 'static,
{
    pub fn new(profiles: Arc<TProfiles>) -> Self {
        Self { profiles }
    }

    pub async fn settings(&self, session: Option<&Session>) -> Result<Profile, ProfileSettingsError> {
        let admin = require_admin(session).map_err(|_| ProfileSettingsError::AccessDenied)?;
        self.load(&admin.user_id).await
    }

    pub async fn update_instagram_username(
        &self,
        session: Option<&Session>,
        username: Option<&str>,
    ) -> Result<Profile, ProfileSettingsError> {
        let admin = require_admin(session).map_err(|_| ProfileSettingsError::AccessDenied)?;
        let username = normalize_instagram_username(username)?;
        self.profiles
            .update_instagram_username(&admin.user_id, username.as_deref())
            .await?;
        tracing::info!(admin = %admin.user_id, instagram = ?username, "profile settings updated");
        self.load(&admin.user_id).await
    }

    async fn load(&self, user_id: &str) -> Result<Profile, ProfileSettingsError> {
        self.profiles
            .find(user_id)
            .await?
            .ok_or_else(|| ProfileSettingsError::NotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod update_profile_settings_handler_tests {
    use super::*;
    use crate::modules::accounts::adapters::outbound::profile_store_in_memory::InMemoryProfileStore;
    use crate::modules::accounts::core::session::Role;
    use crate::tests::fixtures::sessions::{admin_session, client_session};
    use rstest::rstest;

    async fn seeded_profiles() -> Arc<InMemoryProfileStore> {
        let admin = admin_session();
        let store = Arc::new(InMemoryProfileStore::new());
        store.create_default(&admin.user_id, &admin.email).await.unwrap();
        store.set_role(&admin.user_id, Some(Role::Admin)).await.unwrap();
        store
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("@"), None)]
    #[case(Some(" mg.makeup "), Some("mg.makeup"))]
    #[case(Some("@mg_makeup"), Some("mg_makeup"))]
    fn it_should_normalize_instagram_usernames(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            normalize_instagram_username(raw),
            Ok(expected.map(str::to_string))
        );
    }

    #[rstest]
    #[case("mg makeup")]
    #[case("mg/makeup")]
    #[case("a_username_that_is_far_too_long_for_instagram")]
    fn it_should_reject_malformed_instagram_usernames(#[case] raw: &str) {
        assert!(matches!(
            normalize_instagram_username(Some(raw)),
            Err(ProfileSettingsError::InvalidUsername(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_and_clear_the_admins_instagram_username() {
        let handler = UpdateProfileSettingsHandler::new(seeded_profiles().await);
        let admin = admin_session();

        let updated = handler
            .update_instagram_username(Some(&admin), Some("@mg.makeup"))
            .await
            .unwrap();
        assert_eq!(updated.instagram_username.as_deref(), Some("mg.makeup"));
        assert_eq!(handler.settings(Some(&admin)).await.unwrap(), updated);

        let cleared = handler
            .update_instagram_username(Some(&admin), Some("  "))
            .await
            .unwrap();
        assert_eq!(cleared.instagram_username, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_deny_clients_and_anonymous_callers() {
        let handler = UpdateProfileSettingsHandler::new(seeded_profiles().await);
        let client = client_session();

        assert_eq!(
            handler.settings(Some(&client)).await,
            Err(ProfileSettingsError::AccessDenied)
        );
        assert_eq!(
            handler
                .update_instagram_username(None, Some("mg.makeup"))
                .await,
            Err(ProfileSettingsError::AccessDenied)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_admin_profile() {
        let handler = UpdateProfileSettingsHandler::new(Arc::new(InMemoryProfileStore::new()));
        let admin = admin_session();
        assert_eq!(
            handler
                .update_instagram_username(Some(&admin), Some("mg.makeup"))
                .await,
            Err(ProfileSettingsError::NotFound(admin.user_id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_store_failures() {
        let mut store = InMemoryProfileStore::new();
        store.toggle_offline();
        let handler = UpdateProfileSettingsHandler::new(Arc::new(store));
        assert!(matches!(
            handler.settings(Some(&admin_session())).await,
            Err(ProfileSettingsError::Persistence(_))
        ));
    }
}
