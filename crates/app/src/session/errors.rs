//! Session store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session identifier is empty")]
    EmptySessionId,

    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}
