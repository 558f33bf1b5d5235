//! Customers

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::CustomersServiceError;
pub use service::*;
