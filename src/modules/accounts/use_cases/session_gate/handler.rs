use crate::modules::accounts::adapters::outbound::identity_provider::{
    IdentityError, IdentityProvider,
};
use crate::modules::accounts::adapters::outbound::profile_store::ProfileStore;
use crate::modules::accounts::adapters::outbound::session_storage::SessionStorage;
use crate::modules::accounts::core::errors::AuthError;
use crate::modules::accounts::core::session::{
    AuthState, Role, Session, SessionToken, require_admin,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoutOutcome {
    pub remote_signed_out: bool,
}

/// What a successful login or registration hands back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedIn {
    pub token: SessionToken,
    pub session: Session,
}

/// Sole owner of the live sessions, one per token. Login, register and
/// logout are the only operations that change them; everything else reads
/// the session a token resolves to.
pub struct SessionGate<TIdentity, TProfiles>
where
    TIdentity: IdentityProvider + 'static,
    TProfiles: ProfileStore + 'static,
{
    identity: Arc<TIdentity>,
    profiles: Arc<TProfiles>,
    storage: Arc<dyn SessionStorage>,
    sessions: RwLock<HashMap<SessionToken, AuthState>>,
}

fn map_identity_error(error: IdentityError) -> AuthError {
    match error {
        IdentityError::InvalidCredentials => AuthError::InvalidCredentials,
        IdentityError::EmptyPassword | IdentityError::EmailTaken(_) => {
            AuthError::InvalidInput(error.to_string())
        }
        other => AuthError::Unknown(other.to_string()),
    }
}

pub fn validate_new_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::InvalidInput(
            IdentityError::EmptyPassword.to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

impl<TIdentity, TProfiles> SessionGate<TIdentity, TProfiles>
where
    TIdentity: IdentityProvider + 'static,
    TProfiles: ProfileStore + 'static,
{
    pub fn new(
        identity: Arc<TIdentity>,
        profiles: Arc<TProfiles>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        Self {
            identity,
            profiles,
            storage,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn state(&self, token: &SessionToken) -> AuthState {
        self.sessions
            .read()
            .await
            .get(token)
            .cloned()
            .unwrap_or(AuthState::Anonymous)
    }

    pub async fn resolve(&self, token: &SessionToken) -> Option<Session> {
        self.sessions
            .read()
            .await
            .get(token)
            .and_then(|state| state.session().cloned())
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .await
            .values()
            .filter(|state| state.session().is_some())
            .count()
    }

    pub async fn require_admin(&self, token: Option<&SessionToken>) -> Result<Session, AuthError> {
        let session = self.resolve_caller(token).await;
        require_admin(session.as_ref()).cloned()
    }

    async fn resolve_caller(&self, token: Option<&SessionToken>) -> Option<Session> {
        match token {
            Some(token) => self.resolve(token).await,
            None => None,
        }
    }

    /// Restores the persisted sessions at startup. An unreadable store is
    /// discarded. Sessions of users the provider no longer knows are dropped.
    pub async fn rehydrate(&self) -> usize {
        let persisted = match self.storage.load().await {
            Ok(persisted) => persisted,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable persisted sessions");
                if let Err(e) = self.storage.clear().await {
                    tracing::warn!(error = %e, "could not clear persisted sessions");
                }
                return 0;
            }
        };

        let mut restored = 0;
        for (token, session) in persisted {
            match self.identity.find_user(&session.user_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    tracing::warn!(user_id = %session.user_id, "dropping session of an unknown user");
                    self.remove_persisted(&token).await;
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        user_id = %session.user_id,
                        error = %e,
                        "identity provider unavailable, restoring session unverified"
                    );
                }
            }
            self.sessions
                .write()
                .await
                .insert(token, AuthState::Authenticated(session));
            restored += 1;
        }
        tracing::info!(restored, "sessions rehydrated");
        restored
    }

    /// A new login replaces whatever session the caller held, also when it fails.
    pub async fn login(
        &self,
        current: Option<&SessionToken>,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AuthError> {
        self.discard(current).await;
        let token = self.begin().await;
        match self.authenticate(email, password).await {
            Ok(session) => Ok(self.establish(token, session).await),
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.sessions.write().await.remove(&token);
                Err(e)
            }
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .identity
            .sign_in(email, password)
            .await
            .map_err(map_identity_error)?;

        // Role drives every authorization decision, so a login without one is no login.
        let profile = match self.profiles.find(&user.user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                self.abandon_remote_session(&user.user_id).await;
                return Err(AuthError::ProfileLookupFailed(format!(
                    "no profile for user {}",
                    user.user_id
                )));
            }
            Err(e) => {
                self.abandon_remote_session(&user.user_id).await;
                return Err(AuthError::ProfileLookupFailed(e.to_string()));
            }
        };

        Ok(Session {
            user_id: user.user_id,
            email: user.email,
            role: profile.role,
        })
    }

    /// Creates the account; the profile store assigns the `client` role on
    /// its own. The phone number collected at sign-up lands on the profile.
    pub async fn register(
        &self,
        current: Option<&SessionToken>,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<SignedIn, AuthError> {
        self.discard(current).await;
        let token = self.begin().await;
        match self.create_account(email, password, phone).await {
            Ok(session) => Ok(self.establish(token, session).await),
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                self.sessions.write().await.remove(&token);
                Err(e)
            }
        }
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<Session, AuthError> {
        validate_new_password(password)?;
        let user = self
            .identity
            .sign_up(email, password)
            .await
            .map_err(map_identity_error)?;

        if let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) {
            if let Err(e) = self.profiles.update_phone(&user.user_id, phone).await {
                self.abandon_remote_session(&user.user_id).await;
                return Err(AuthError::Unknown(e.to_string()));
            }
        }

        Ok(Session {
            user_id: user.user_id,
            email: user.email,
            role: Some(Role::Client),
        })
    }

    async fn begin(&self) -> SessionToken {
        let token = SessionToken::generate();
        self.sessions
            .write()
            .await
            .insert(token.clone(), AuthState::Authenticating);
        token
    }

    async fn establish(&self, token: SessionToken, session: Session) -> SignedIn {
        if let Err(e) = self.storage.save(&token, &session).await {
            tracing::warn!(user_id = %session.user_id, error = %e, "session not persisted");
        }
        tracing::info!(user_id = %session.user_id, role = ?session.role, "session established");
        self.sessions
            .write()
            .await
            .insert(token.clone(), AuthState::Authenticated(session.clone()));
        SignedIn { token, session }
    }

    async fn discard(&self, token: Option<&SessionToken>) -> Option<Session> {
        let token = token?;
        let previous = self.sessions.write().await.remove(token);
        self.remove_persisted(token).await;
        previous.and_then(|state| state.session().cloned())
    }

    async fn remove_persisted(&self, token: &SessionToken) {
        if let Err(e) = self.storage.remove(token).await {
            tracing::warn!(error = %e, "could not remove persisted session");
        }
    }

    async fn abandon_remote_session(&self, user_id: &str) {
        if let Err(e) = self.identity.sign_out(user_id).await {
            tracing::warn!(%user_id, error = %e, "could not sign out abandoned remote session");
        }
    }

    /// Always drops the caller's session. A failed remote sign-out is logged
    /// for reconciliation and reported to the caller, never raised. Without a
    /// session there is nothing to sign out.
    pub async fn logout(&self, token: Option<&SessionToken>) -> LogoutOutcome {
        let Some(previous) = self.discard(token).await else {
            return LogoutOutcome {
                remote_signed_out: true,
            };
        };
        let remote_signed_out = match self.identity.sign_out(&previous.user_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    user_id = %previous.user_id,
                    error = %e,
                    "remote sign-out failed, local session cleared anyway"
                );
                false
            }
        };
        LogoutOutcome { remote_signed_out }
    }

    /// Re-verifies the old password before handing the change to the provider.
    pub async fn change_password(
        &self,
        token: Option<&SessionToken>,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let session = self
            .resolve_caller(token)
            .await
            .ok_or(AuthError::AccessDenied)?;
        validate_new_password(new_password)?;
        self.identity
            .sign_in(&session.email, old_password)
            .await
            .map_err(map_identity_error)?;
        self.identity
            .update_password(&session.user_id, new_password)
            .await
            .map_err(map_identity_error)?;
        tracing::info!(user_id = %session.user_id, "password changed");
        Ok(())
    }
}
