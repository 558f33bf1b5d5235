//! Error Categories

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Coarse classification shared by cart and checkout failures.
///
/// Only [`ErrorCategory::Transient`] failures are safe to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request is not valid for the current state (e.g. empty cart checkout).
    InvalidState,

    /// A referenced cart line, product, customer or order does not exist.
    NotFound,

    /// A product does not have enough stock for the requested quantity.
    InsufficientStock,

    /// Lock conflict or timeout; the whole unit of work was rolled back.
    Transient,

    /// Anything else. Details are logged, never returned to callers.
    Unexpected,
}

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidState => "invalid_state",
            Self::NotFound => "not_found",
            Self::InsufficientStock => "insufficient_stock",
            Self::Transient => "transient",
            Self::Unexpected => "unexpected",
        }
    }

    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Transient)
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
