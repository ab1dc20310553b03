//! In-memory SessionRepository implementation

use async_trait::async_trait;
use lttrs_core::Result;
use lttrs_core::session::{Session, SessionRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps sessions in a map for the lifetime of the process.
///
/// Used for throwaway games and as a fast store in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.id().to_string(), session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let mut sessions: Vec<Session> = self.sessions.read().await.values().cloned().collect();
        sessions.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        Ok(sessions)
    }
}
