use crate::modules::accounts::adapters::outbound::session_storage::{
    PersistedSessions, SessionStorage, SessionStorageError,
};
use crate::modules::accounts::core::session::{Session, SessionToken};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Persists the live sessions as one JSON object keyed by token. Every
/// change rewrites the whole file through a temp file and a rename.
pub struct JsonFileSessionStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<PersistedSessions, SessionStorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PersistedSessions::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, sessions: &PersistedSessions) -> Result<(), SessionStorageError> {
        let bytes = serde_json::to_vec_pretty(sessions)?;
        let staging = self.path.with_extension("tmp");
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStorage for JsonFileSessionStorage {
    async fn load(&self) -> Result<PersistedSessions, SessionStorageError> {
        self.read_all().await
    }

    async fn save(
        &self,
        token: &SessionToken,
        session: &Session,
    ) -> Result<(), SessionStorageError> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.read_all().await?;
        sessions.insert(token.clone(), session.clone());
        self.write_all(&sessions).await
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStorageError> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.read_all().await?;
        if sessions.remove(token).is_some() {
            self.write_all(&sessions).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStorageError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
