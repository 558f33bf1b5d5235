//! Session store interface.

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionStoreError;

/// Opaque identifier of one client session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh session identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Key-value storage scoped to a session.
///
/// Values are opaque bytes; callers own their encoding.
#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(
        &self,
        session: &SessionId,
        key: &str,
    ) -> Result<Option<Vec<u8>>, SessionStoreError>;

    /// Replace the value stored under `key`.
    async fn set(
        &self,
        session: &SessionId,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), SessionStoreError>;

    /// Evict sessions that have been idle past the store's timeout.
    ///
    /// Returns the number of sessions evicted.
    async fn purge_expired(&self) -> usize {
        0
    }
}
