//! In-memory session store.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::StoreError;
use crate::id::SessionId;
use crate::session::Session;

use super::{SessionStore, SweepStats};

/// Process-local [`SessionStore`] backed by a lock-guarded map.
///
/// Sessions are handed out as clones and written back on save, so two
/// requests racing on the same identifier resolve to whichever saved last.
/// Expired entries are only dropped by [`sweep`](SessionStore::sweep);
/// loading one merely stops returning it.
pub struct MemoryStore {
    /// Live sessions indexed by identifier.
    sessions: RwLock<HashMap<SessionId, Session>>,
    config: SessionConfig,
}

impl MemoryStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of sessions currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    pub async fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    /// [`load`](SessionStore::load) against an explicit clock.
    pub async fn load_at(
        &self,
        id: Option<SessionId>,
        now: i64,
    ) -> Result<Session, StoreError> {
        if let Some(id) = id {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(&id) {
                if !session.is_expired(self.config.validity_window, now) {
                    return Ok(session.clone());
                }
                debug!(session = %id, "session expired, starting fresh");
            }
        }

        let id = SessionId::generate()?;
        Ok(Session::new_at(id, now))
    }

    /// [`save`](SessionStore::save) against an explicit clock.
    pub async fn save_at(&self, session: &mut Session, now: i64) -> Result<(), StoreError> {
        session.touch(now);
        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());
        Ok(())
    }

    /// [`sweep`](SessionStore::sweep) against an explicit clock.
    pub async fn sweep_at(&self, now: i64) -> SweepStats {
        let started = Instant::now();
        let mut sessions = self.sessions.write().await;
        let scanned = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.config.validity_window, now));

        SweepStats {
            scanned,
            removed: scanned - sessions.len(),
            elapsed: started.elapsed(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, id: Option<SessionId>) -> Result<Session, StoreError> {
        self.load_at(id, Utc::now().timestamp()).await
    }

    async fn save(&self, session: &mut Session) -> Result<(), StoreError> {
        self.save_at(session, Utc::now().timestamp()).await
    }

    async fn sweep(&self) -> SweepStats {
        self.sweep_at(Utc::now().timestamp()).await
    }
}
