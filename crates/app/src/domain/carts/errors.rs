//! Carts service errors.

use thiserror::Error;

use crate::{
    domain::products::models::ProductId, errors::ErrorCategory, session::SessionStoreError,
};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("price must be a non-negative amount with at most two decimal places")]
    InvalidPrice,

    #[error("cart total exceeds the largest order amount")]
    AmountOutOfRange,

    #[error("stored cart could not be read")]
    Decode(#[source] serde_json::Error),

    #[error("cart could not be stored")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl CartsServiceError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::InvalidQuantity
            | Self::InvalidPrice
            | Self::AmountOutOfRange
            | Self::Session(SessionStoreError::EmptySessionId) => ErrorCategory::InvalidState,
            Self::Session(SessionStoreError::Unavailable(_)) => ErrorCategory::Transient,
            Self::Decode(_) | Self::Encode(_) => ErrorCategory::Unexpected,
        }
    }
}
