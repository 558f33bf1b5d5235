//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::customers::{
        errors::CustomersServiceError,
        models::{Customer, CustomerId, NewCustomer},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError> {
        if customer.name.trim().is_empty() || customer.email.trim().is_empty() {
            return Err(CustomersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_customer(&self, customer: CustomerId) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Registers a new customer.
    async fn create_customer(&self, customer: NewCustomer)
    -> Result<Customer, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(&self, customer: CustomerId) -> Result<Customer, CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    #[ignore = "requires a docker daemon"]
    async fn create_then_get_customer() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .customers
            .create_customer(NewCustomer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await?;

        let customer = ctx.customers.get_customer(created.customer_id).await?;

        assert_eq!(customer, created);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a docker daemon"]
    async fn duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        let new = NewCustomer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        ctx.customers.create_customer(new.clone()).await?;

        let result = ctx.customers.create_customer(new).await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a docker daemon"]
    async fn unknown_customer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_customer(CustomerId::from_i64(99)).await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
