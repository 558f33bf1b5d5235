//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartLine, NewCartLine, is_valid_price},
            repository::SessionCartRepository,
        },
        products::models::ProductId,
    },
    session::{SessionId, SessionStore},
};

/// Cart operations backed by the session store.
///
/// Each call reads the whole cart document, changes it and writes it back.
/// Two concurrent edits in the same session may overwrite each other.
#[derive(Debug, Clone)]
pub struct SessionCartsService {
    repository: SessionCartRepository,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            repository: SessionCartRepository::new(store),
        }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn get_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError> {
        if let Some(cart) = self.repository.load(&session).await? {
            return Ok(cart);
        }

        self.repository.clear(&session).await
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartLine,
    ) -> Result<Cart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        if !is_valid_price(item.price) {
            return Err(CartsServiceError::InvalidPrice);
        }

        let mut cart = self.repository.load(&session).await?.unwrap_or_default();

        match cart.line_mut(item.product_id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(CartsServiceError::InvalidQuantity)?;
            }
            None => cart.lines.push(CartLine::from(item)),
        }

        ensure_storable(&cart)?;

        self.repository.save(&session, &cart).await?;

        Ok(cart)
    }

    async fn update_item(
        &self,
        session: SessionId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.repository.load(&session).await?.unwrap_or_default();

        let Some(line) = cart.line_mut(product) else {
            return Err(CartsServiceError::NotFound(product));
        };

        if quantity <= 0 {
            debug!(%product, quantity, "non-positive quantity, removing line");

            cart.remove(product);
        } else {
            line.quantity =
                u32::try_from(quantity).map_err(|_overflow| CartsServiceError::InvalidQuantity)?;

            ensure_storable(&cart)?;
        }

        self.repository.save(&session, &cart).await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductId,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.repository.load(&session).await?.unwrap_or_default();

        if cart.remove(product) {
            self.repository.save(&session, &cart).await?;
        }

        Ok(cart)
    }

    async fn clear_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError> {
        self.repository.clear(&session).await
    }
}

/// Reject carts whose total could not be written as an order amount.
fn ensure_storable(cart: &Cart) -> Result<(), CartsServiceError> {
    cart.total()
        .map(|_| ())
        .ok_or(CartsServiceError::AmountOutOfRange)
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the session's cart, storing an empty one on first access.
    async fn get_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError>;

    /// Add a product, increasing the quantity if the cart already holds it.
    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartLine,
    ) -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity. Zero or less removes the line.
    async fn update_item(
        &self,
        session: SessionId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line; absent lines are ignored.
    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductId,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace the cart with an empty one.
    async fn clear_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError>;
}
