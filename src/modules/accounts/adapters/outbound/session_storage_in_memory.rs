use crate::modules::accounts::adapters::outbound::session_storage::{
    PersistedSessions, SessionStorage, SessionStorageError,
};
use crate::modules::accounts::core::session::{Session, SessionToken};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemorySessionStorage {
    sessions: Mutex<PersistedSessions>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: SessionToken, session: Session) -> Self {
        Self {
            sessions: Mutex::new(PersistedSessions::from([(token, session)])),
        }
    }
}

#[async_trait::async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<PersistedSessions, SessionStorageError> {
        Ok(self.sessions.lock().await.clone())
    }

    async fn save(
        &self,
        token: &SessionToken,
        session: &Session,
    ) -> Result<(), SessionStorageError> {
        self.sessions
            .lock()
            .await
            .insert(token.clone(), session.clone());
        Ok(())
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStorageError> {
        self.sessions.lock().await.remove(token);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStorageError> {
        self.sessions.lock().await.clear();
        Ok(())
    }
}
