//! Checkout

pub mod errors;
pub mod postgres;
pub mod service;
pub mod unit_of_work;

pub use errors::CheckoutError;
pub use postgres::{PgCheckoutStore, PgUnitOfWork};
pub use service::*;
pub use unit_of_work::{CheckoutStore, UnitOfWork};
