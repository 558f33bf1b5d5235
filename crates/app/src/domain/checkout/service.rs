//! Checkout service.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tokio::time::timeout;
use tracing::{Span, error, info, instrument, warn};

use crate::{
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, is_valid_price},
            repository::SessionCartRepository,
        },
        checkout::{
            errors::CheckoutError,
            postgres::PgCheckoutStore,
            unit_of_work::{CheckoutStore, UnitOfWork},
        },
        customers::models::CustomerId,
        orders::models::{NewOrder, NewOrderLine, Order},
        products::models::{Product, ProductId},
    },
    session::{SessionId, SessionStore},
};

/// Checkout engine over Postgres.
pub type PgCheckoutService = CheckoutEngine<PgCheckoutStore>;

/// Converts a session's cart into an order in one unit of work.
#[derive(Clone)]
pub struct CheckoutEngine<S> {
    store: S,
    carts: SessionCartRepository,
    timeout: Duration,
}

impl<S: std::fmt::Debug> std::fmt::Debug for CheckoutEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutEngine")
            .field("store", &self.store)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<S: CheckoutStore> CheckoutEngine<S> {
    /// `timeout` bounds the cart read and every write up to the commit.
    #[must_use]
    pub fn new(store: S, sessions: Arc<dyn SessionStore>, timeout: Duration) -> Self {
        Self {
            store,
            carts: SessionCartRepository::new(sessions),
            timeout,
        }
    }

    /// Write the order inside a fresh unit of work and hand back the
    /// uncommitted unit. Any failure rolls the unit back.
    async fn prepare_order(
        &self,
        customer: CustomerId,
        session: &SessionId,
    ) -> Result<(S::Unit, Order), CheckoutError> {
        let cart = self.carts.load(session).await?.unwrap_or_default();

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if !cart.lines.iter().all(|line| is_valid_price(line.price)) {
            return Err(CartsServiceError::InvalidPrice.into());
        }

        let total = cart.total().ok_or(CartsServiceError::AmountOutOfRange)?;

        Span::current().record("lines", cart.lines.len());

        let mut unit = self.store.begin().await?;

        match write_order(&mut unit, customer, &cart, total).await {
            Ok(order) => Ok((unit, order)),
            Err(error) => {
                if let Err(rollback) = unit.rollback().await {
                    warn!(%rollback, "checkout rollback failed, relying on connection reset");
                }

                Err(error)
            }
        }
    }
}

#[async_trait]
impl<S: CheckoutStore> CheckoutService for CheckoutEngine<S> {
    #[instrument(skip(self), fields(lines = tracing::field::Empty))]
    async fn checkout(
        &self,
        customer: CustomerId,
        session: SessionId,
    ) -> Result<Order, CheckoutError> {
        let prepared = match timeout(self.timeout, self.prepare_order(customer, &session)).await {
            Ok(prepared) => prepared,
            Err(elapsed) => Err(CheckoutError::from(elapsed)),
        };

        let (unit, order) = prepared.inspect_err(|error| {
            warn!(%error, category = %error.category(), "checkout failed");
        })?;

        // Not bounded by the timeout: a commit abandoned in flight may still land.
        unit.commit().await.inspect_err(|error| {
            error!(%error, category = %error.category(), "checkout commit failed");
        })?;

        info!(
            order = %order.order_id,
            total = %order.total_amount,
            "checkout committed"
        );

        if let Err(clear) = self.carts.clear(&session).await {
            error!(order = %order.order_id, %clear, "failed to clear cart after committed checkout");
        }

        Ok(order)
    }
}

/// Validate every cart line against locked stock and write the order.
///
/// Products are locked in ascending id order; lines are written in cart order.
async fn write_order<U: UnitOfWork>(
    unit: &mut U,
    customer: CustomerId,
    cart: &Cart,
    total: Decimal,
) -> Result<Order, CheckoutError> {
    let mut ids: SmallVec<[ProductId; 8]> = cart.lines.iter().map(|l| l.product_id).collect();

    ids.sort_unstable();
    ids.dedup();

    let locked: FxHashMap<ProductId, Product> = unit
        .lock_products(&ids)
        .await?
        .into_iter()
        .map(|product| (product.product_id, product))
        .collect();

    let mut order = unit
        .create_order(NewOrder {
            customer_id: customer,
            total_amount: total,
        })
        .await?;

    for (line_number, line) in (1..).zip(&cart.lines) {
        let Some(product) = locked.get(&line.product_id) else {
            return Err(CheckoutError::ProductNotFound(line.product_id));
        };

        let insufficient = || CheckoutError::InsufficientStock {
            product: product.product_id,
            name: product.name.clone(),
            available: product.stock,
            requested: line.quantity,
        };

        if product.stock < line.quantity {
            return Err(insufficient());
        }

        if unit
            .decrement_stock(line.product_id, line.quantity)
            .await?
            .is_none()
        {
            return Err(insufficient());
        }

        let line_total = line
            .line_total()
            .ok_or(CartsServiceError::AmountOutOfRange)?;

        let written = unit
            .create_order_line(NewOrderLine {
                order_id: order.order_id,
                product_id: line.product_id,
                line_number,
                quantity: line.quantity,
                line_total,
            })
            .await?;

        order.lines.push(written);
    }

    Ok(order)
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn the session's cart into an order, decrementing stock.
    ///
    /// On success the cart is emptied. On failure nothing is written and the
    /// cart is left as it was.
    async fn checkout(
        &self,
        customer: CustomerId,
        session: SessionId,
    ) -> Result<Order, CheckoutError>;
}
