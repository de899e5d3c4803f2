use crate::modules::accounts::core::session::{Session, SessionToken};
use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStorageError {
    #[error("session storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted sessions are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type PersistedSessions = BTreeMap<SessionToken, Session>;

/// Keeps every live session across restarts, keyed by its token. Holds no
/// passwords, but the tokens are bearer credentials.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn load(&self) -> Result<PersistedSessions, SessionStorageError>;
    async fn save(&self, token: &SessionToken, session: &Session)
    -> Result<(), SessionStorageError>;
    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStorageError>;
    async fn clear(&self) -> Result<(), SessionStorageError>;
}
