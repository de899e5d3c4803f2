use crate::modules::accounts::core::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

/// The authenticated identity held by the current user. A profile without a
/// role yields `role: None`, which grants no privileges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
}

/// Opaque bearer handle naming one signed-in client. Minted on login or
/// registration and presented back on every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accepts any non-blank value; unknown tokens simply resolve to no session.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

pub fn is_admin(session: Option<&Session>) -> bool {
    matches!(
        session,
        Some(Session {
            role: Some(Role::Admin),
            ..
        })
    )
}

/// Admin-only operations call this before reading or mutating anything.
pub fn require_admin(session: Option<&Session>) -> Result<&Session, AuthError> {
    match session {
        Some(session) if is_admin(Some(session)) => Ok(session),
        _ => Err(AuthError::AccessDenied),
    }
}
