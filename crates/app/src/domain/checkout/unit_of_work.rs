//! Checkout unit of work.

use async_trait::async_trait;

use crate::domain::{
    checkout::errors::CheckoutError,
    orders::models::{NewOrder, NewOrderLine, Order, OrderLine},
    products::models::{Product, ProductId},
};

/// Source of checkout units of work.
#[async_trait]
pub trait CheckoutStore: Send + Sync {
    type Unit: UnitOfWork;

    /// Start a unit of work. Nothing it writes is visible until commit.
    async fn begin(&self) -> Result<Self::Unit, CheckoutError>;
}

/// One all-or-nothing set of stock and order writes.
///
/// Dropping a unit without committing discards every write it made.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Lock the given products until the unit ends, returning those that exist.
    async fn lock_products(&mut self, products: &[ProductId])
    -> Result<Vec<Product>, CheckoutError>;

    /// Decrement stock if at least `quantity` remains, returning what is left.
    async fn decrement_stock(
        &mut self,
        product: ProductId,
        quantity: u32,
    ) -> Result<Option<u32>, CheckoutError>;

    async fn create_order(&mut self, order: NewOrder) -> Result<Order, CheckoutError>;

    async fn create_order_line(&mut self, line: NewOrderLine) -> Result<OrderLine, CheckoutError>;

    async fn commit(self) -> Result<(), CheckoutError>;

    async fn rollback(self) -> Result<(), CheckoutError>;
}
