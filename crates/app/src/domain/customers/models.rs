//! Customer Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Customer ID
pub type CustomerId = TypedId<Customer>;

/// Customer Model
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// New Customer Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}
