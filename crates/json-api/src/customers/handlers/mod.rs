//! Customer Handlers

pub(crate) mod create;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::customers::models::Customer;

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerResponse {
    pub customer_id: i64,

    pub name: String,

    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id.into_i64(),
            name: customer.name,
            email: customer.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use storefront_app::domain::customers::models::CustomerId;

    use super::*;

    pub(super) fn make_customer(id: i64) -> Customer {
        Customer {
            customer_id: CustomerId::from_i64(id),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
