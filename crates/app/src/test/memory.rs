//! In-memory checkout store for engine tests.
//!
//! Each product row has its own lock, held from `lock_products` until the
//! unit ends. Units stage their stock and order writes and publish them on
//! commit, so an uncommitted unit never leaks into the shared tables and
//! units touching disjoint products run side by side.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{
        Arc,
        atomic::{AtomicI64, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use jiff::Timestamp;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{
    checkout::{CheckoutError, CheckoutStore, UnitOfWork},
    customers::models::CustomerId,
    orders::models::{NewOrder, NewOrderLine, Order, OrderId, OrderLine},
    products::models::{Product, ProductId},
};

#[derive(Debug, Default)]
struct Tables {
    products: BTreeMap<ProductId, Product>,
    customers: BTreeSet<CustomerId>,
    orders: Vec<Order>,
}

type RowLocks = BTreeMap<ProductId, Arc<Mutex<()>>>;

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryCheckoutStore {
    tables: Arc<Mutex<Tables>>,
    rows: Arc<Mutex<RowLocks>>,
    next_order: Arc<AtomicI64>,
    rollbacks: Arc<AtomicUsize>,
    fail_at_line: Option<u32>,
    lock_delay: Option<Duration>,
    commit_delay: Option<Duration>,
}

impl MemoryCheckoutStore {
    /// Fail the unit when it writes its `line`th order line (1-based).
    pub(crate) fn failing_at_line(mut self, line: u32) -> Self {
        self.fail_at_line = Some(line);
        self
    }

    /// Stall for `delay` after taking each product lock.
    pub(crate) fn with_lock_delay(mut self, delay: Duration) -> Self {
        self.lock_delay = Some(delay);
        self
    }

    /// Stall every commit by `delay` before its writes are published.
    pub(crate) fn with_commit_delay(mut self, delay: Duration) -> Self {
        self.commit_delay = Some(delay);
        self
    }

    pub(crate) async fn add_product(&self, id: i64, name: &str, price: Decimal, stock: u32) {
        let now = Timestamp::now();
        let product_id = ProductId::from_i64(id);

        self.tables.lock().await.products.insert(
            product_id,
            Product {
                product_id,
                name: name.to_string(),
                code: format!("P{id}"),
                description: String::new(),
                price,
                stock,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub(crate) async fn add_customer(&self, id: i64) -> CustomerId {
        let customer = CustomerId::from_i64(id);

        self.tables.lock().await.customers.insert(customer);

        customer
    }

    pub(crate) async fn stock(&self, id: i64) -> Option<u32> {
        self.tables
            .lock()
            .await
            .products
            .get(&ProductId::from_i64(id))
            .map(|product| product.stock)
    }

    pub(crate) async fn orders(&self) -> Vec<Order> {
        self.tables.lock().await.orders.clone()
    }

    pub(crate) fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CheckoutStore for MemoryCheckoutStore {
    type Unit = MemoryUnitOfWork;

    async fn begin(&self) -> Result<MemoryUnitOfWork, CheckoutError> {
        Ok(MemoryUnitOfWork {
            store: self.clone(),
            held: BTreeMap::new(),
            stock: BTreeMap::new(),
            orders: Vec::new(),
            lines_written: 0,
        })
    }
}

#[derive(Debug)]
pub(crate) struct MemoryUnitOfWork {
    store: MemoryCheckoutStore,
    held: BTreeMap<ProductId, OwnedMutexGuard<()>>,
    /// Stock of every locked product as this unit sees it.
    stock: BTreeMap<ProductId, u32>,
    orders: Vec<Order>,
    lines_written: u32,
}

impl MemoryUnitOfWork {
    async fn row_lock(&self, product: ProductId) -> Arc<Mutex<()>> {
        Arc::clone(self.store.rows.lock().await.entry(product).or_default())
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn lock_products(
        &mut self,
        products: &[ProductId],
    ) -> Result<Vec<Product>, CheckoutError> {
        for &id in products {
            if self.held.contains_key(&id) {
                continue;
            }

            let guard = self.row_lock(id).await.lock_owned().await;

            self.held.insert(id, guard);

            if let Some(delay) = self.store.lock_delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(product) = self.store.tables.lock().await.products.get(&id) {
                self.stock.insert(id, product.stock);
            }
        }

        let tables = self.store.tables.lock().await;

        Ok(products
            .iter()
            .filter_map(|id| {
                let stock = *self.stock.get(id)?;

                tables
                    .products
                    .get(id)
                    .map(|product| Product { stock, ..product.clone() })
            })
            .collect())
    }

    async fn decrement_stock(
        &mut self,
        product: ProductId,
        quantity: u32,
    ) -> Result<Option<u32>, CheckoutError> {
        // Writes are only allowed on rows this unit holds.
        let Some(stock) = self.stock.get_mut(&product) else {
            return Err(CheckoutError::InvalidData);
        };

        if *stock < quantity {
            return Ok(None);
        }

        *stock -= quantity;

        Ok(Some(*stock))
    }

    async fn create_order(&mut self, order: NewOrder) -> Result<Order, CheckoutError> {
        if !self
            .store
            .tables
            .lock()
            .await
            .customers
            .contains(&order.customer_id)
        {
            return Err(CheckoutError::CustomerNotFound);
        }

        let next = self.store.next_order.fetch_add(1, Ordering::SeqCst) + 1;

        let created = Order {
            order_id: OrderId::from_i64(next),
            customer_id: order.customer_id,
            order_date: Timestamp::now(),
            total_amount: order.total_amount,
            lines: Vec::new(),
        };

        self.orders.push(created.clone());

        Ok(created)
    }

    async fn create_order_line(&mut self, line: NewOrderLine) -> Result<OrderLine, CheckoutError> {
        self.lines_written += 1;

        if self.store.fail_at_line == Some(self.lines_written) {
            return Err(CheckoutError::Sql(sqlx::Error::Protocol(
                "injected order line failure".to_string(),
            )));
        }

        let written = OrderLine {
            order_id: line.order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            line_total: line.line_total,
        };

        let order = self
            .orders
            .iter_mut()
            .find(|order| order.order_id == line.order_id)
            .ok_or(CheckoutError::InvalidData)?;

        order.lines.push(written.clone());

        Ok(written)
    }

    async fn commit(self) -> Result<(), CheckoutError> {
        if let Some(delay) = self.store.commit_delay {
            tokio::time::sleep(delay).await;
        }

        let mut tables = self.store.tables.lock().await;

        for (id, stock) in &self.stock {
            if let Some(product) = tables.products.get_mut(id) {
                product.stock = *stock;
            }
        }

        tables.orders.extend(self.orders);

        Ok(())
    }

    async fn rollback(self) -> Result<(), CheckoutError> {
        self.store.rollbacks.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}
