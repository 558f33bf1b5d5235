//! In-process session store.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::session::{SessionId, SessionStore, SessionStoreError};

/// Default idle timeout before a session and everything in it is dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    values: FxHashMap<String, Vec<u8>>,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            values: FxHashMap::default(),
            last_seen: now,
        }
    }

    fn is_expired(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= idle_timeout
    }
}

/// Session store held in process memory.
///
/// Sessions expire after `idle_timeout` without access. Expired sessions read
/// as empty immediately and are evicted by [`SessionStore::purge_expired`].
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: Mutex<FxHashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

impl MemorySessionStore {
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(FxHashMap::default()),
            idle_timeout,
        }
    }

    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Number of sessions currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

fn ensure_session_id(session: &SessionId) -> Result<(), SessionStoreError> {
    if session.as_str().trim().is_empty() {
        return Err(SessionStoreError::EmptySessionId);
    }

    Ok(())
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(
        &self,
        session: &SessionId,
        key: &str,
    ) -> Result<Option<Vec<u8>>, SessionStoreError> {
        ensure_session_id(session)?;

        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;

        let Some(entry) = sessions.get_mut(session) else {
            return Ok(None);
        };

        if entry.is_expired(now, self.idle_timeout) {
            debug!(session = %session, "session expired on read");

            sessions.remove(session);

            return Ok(None);
        }

        entry.last_seen = now;

        Ok(entry.values.get(key).cloned())
    }

    async fn set(
        &self,
        session: &SessionId,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), SessionStoreError> {
        ensure_session_id(session)?;

        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;

        let entry = sessions
            .entry(session.clone())
            .or_insert_with(|| SessionEntry::new(now));

        if entry.is_expired(now, self.idle_timeout) {
            entry.values.clear();
        }

        entry.last_seen = now;
        entry.values.insert(key.to_string(), value);

        Ok(())
    }

    async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();

        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_timeout));

        before - sessions.len()
    }
}
