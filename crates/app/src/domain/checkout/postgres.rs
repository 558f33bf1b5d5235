//! Postgres checkout store.

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use crate::{
    database::{CheckoutTimeouts, Db},
    domain::{
        checkout::{
            errors::CheckoutError,
            unit_of_work::{CheckoutStore, UnitOfWork},
        },
        orders::{
            models::{NewOrder, NewOrderLine, Order, OrderLine},
            repository::PgOrdersRepository,
        },
        products::{
            models::{Product, ProductId},
            repository::PgProductsRepository,
        },
    },
};

/// Opens checkout transactions with lock and statement timeouts applied.
#[derive(Debug, Clone)]
pub struct PgCheckoutStore {
    db: Db,
    timeouts: CheckoutTimeouts,
}

impl PgCheckoutStore {
    #[must_use]
    pub fn new(db: Db, timeouts: CheckoutTimeouts) -> Self {
        Self { db, timeouts }
    }
}

#[async_trait]
impl CheckoutStore for PgCheckoutStore {
    type Unit = PgUnitOfWork;

    async fn begin(&self) -> Result<PgUnitOfWork, CheckoutError> {
        let tx = self.db.begin_checkout_transaction(&self.timeouts).await?;

        Ok(PgUnitOfWork {
            tx,
            products: PgProductsRepository::new(),
            orders: PgOrdersRepository::new(),
        })
    }
}

/// A checkout transaction. Rolled back by the driver if dropped uncommitted.
#[derive(Debug)]
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
    products: PgProductsRepository,
    orders: PgOrdersRepository,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn lock_products(
        &mut self,
        products: &[ProductId],
    ) -> Result<Vec<Product>, CheckoutError> {
        Ok(self.products.lock_products(&mut self.tx, products).await?)
    }

    async fn decrement_stock(
        &mut self,
        product: ProductId,
        quantity: u32,
    ) -> Result<Option<u32>, CheckoutError> {
        Ok(self
            .products
            .decrement_stock(&mut self.tx, product, quantity)
            .await?)
    }

    async fn create_order(&mut self, order: NewOrder) -> Result<Order, CheckoutError> {
        Ok(self.orders.create_order(&mut self.tx, order).await?)
    }

    async fn create_order_line(&mut self, line: NewOrderLine) -> Result<OrderLine, CheckoutError> {
        Ok(self.orders.create_order_line(&mut self.tx, line).await?)
    }

    async fn commit(self) -> Result<(), CheckoutError> {
        Ok(self.tx.commit().await?)
    }

    async fn rollback(self) -> Result<(), CheckoutError> {
        Ok(self.tx.rollback().await?)
    }
}
