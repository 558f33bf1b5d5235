//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderId},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut found = self.repository.get_order(&mut tx, order).await?;

        let lines = self.repository.get_order_lines(&mut tx, order).await?;

        tx.commit().await?;

        found.lines.extend(lines);

        Ok(found)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve a committed order together with its lines.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    #[ignore = "requires a docker daemon"]
    async fn unknown_order_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderId::from_i64(1)).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
