//! Checkout errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;
use tokio::time::error::Elapsed;

use crate::{
    domain::{carts::CartsServiceError, products::models::ProductId},
    errors::ErrorCategory,
};

/// Foreign key from `orders` to `customers`.
const ORDER_CUSTOMER_CONSTRAINT: &str = "orders_customer_id_fkey";

/// SQLSTATEs raised when a checkout loses a lock race or runs out of time.
///
/// `55P03` lock_not_available, `57014` query_canceled, `40001`
/// serialization_failure, `40P01` deadlock_detected.
const TRANSIENT_SQLSTATES: [&str; 4] = ["55P03", "57014", "40001", "40P01"];

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cannot checkout with an empty cart.")]
    EmptyCart,

    #[error("customer not found")]
    CustomerNotFound,

    #[error("Product with ID {0} not found.")]
    ProductNotFound(ProductId),

    #[error("Not enough stock for product {name}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        product: ProductId,
        name: String,
        available: u32,
        requested: u32,
    },

    #[error("checkout timed out")]
    TimedOut(#[from] Elapsed),

    #[error("checkout contended with another transaction")]
    Contended(#[source] Error),

    #[error(transparent)]
    Cart(#[from] CartsServiceError),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CheckoutError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCart => ErrorCategory::InvalidState,
            Self::CustomerNotFound | Self::ProductNotFound(_) => ErrorCategory::NotFound,
            Self::InsufficientStock { .. } => ErrorCategory::InsufficientStock,
            Self::TimedOut(_) | Self::Contended(_) => ErrorCategory::Transient,
            Self::Cart(error) => error.category(),
            Self::InvalidData | Self::Sql(_) => ErrorCategory::Unexpected,
        }
    }
}

impl From<Error> for CheckoutError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::PoolTimedOut) {
            return Self::Contended(error);
        }

        if matches!(error, Error::Encode(_)) {
            return Self::InvalidData;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error
            .code()
            .is_some_and(|code| TRANSIENT_SQLSTATES.contains(&code.as_ref()))
        {
            return Self::Contended(error);
        }

        match database_error.kind() {
            ErrorKind::ForeignKeyViolation
                if database_error.constraint() == Some(ORDER_CUSTOMER_CONSTRAINT) =>
            {
                Self::CustomerNotFound
            }
            ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::SessionStoreError;

    use super::*;

    #[test]
    fn insufficient_stock_message_names_product_and_quantities() {
        let error = CheckoutError::InsufficientStock {
            product: ProductId::from_i64(2),
            name: "Lamp".to_string(),
            available: 3,
            requested: 10,
        };

        assert_eq!(
            error.to_string(),
            "Not enough stock for product Lamp. Available: 3, Requested: 10"
        );
        assert_eq!(error.category(), ErrorCategory::InsufficientStock);
    }

    #[test]
    fn pool_timeouts_are_transient() {
        let error = CheckoutError::from(Error::PoolTimedOut);

        assert!(error.category().is_retryable(), "pool timeout should be retryable");
    }

    #[test]
    fn empty_cart_is_invalid_state() {
        assert_eq!(CheckoutError::EmptyCart.category(), ErrorCategory::InvalidState);
    }

    #[test]
    fn cart_errors_keep_their_category() {
        let error = CheckoutError::from(CartsServiceError::from(SessionStoreError::EmptySessionId));

        assert_eq!(error.category(), ErrorCategory::InvalidState);
    }

    #[test]
    fn other_driver_errors_are_unexpected() {
        let error = CheckoutError::from(Error::Protocol("bad frame".to_string()));

        assert_eq!(error.category(), ErrorCategory::Unexpected);
    }
}
