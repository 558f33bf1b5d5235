//! Session Cart Repository

use std::sync::Arc;

use crate::{
    domain::carts::{errors::CartsServiceError, models::Cart},
    session::{SessionId, SessionStore},
};

/// Session key the cart document is stored under.
pub const CART_SESSION_KEY: &str = "shopping_cart";

/// Reads and writes whole cart documents in the session store.
#[derive(Clone)]
pub(crate) struct SessionCartRepository {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionCartRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCartRepository").finish_non_exhaustive()
    }
}

impl SessionCartRepository {
    #[must_use]
    pub(crate) fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Load the session's cart, or `None` if nothing has been stored yet.
    pub(crate) async fn load(&self, session: &SessionId) -> Result<Option<Cart>, CartsServiceError> {
        let Some(bytes) = self.store.get(session, CART_SESSION_KEY).await? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(CartsServiceError::Decode)
    }

    pub(crate) async fn save(&self, session: &SessionId, cart: &Cart) -> Result<(), CartsServiceError> {
        let bytes = serde_json::to_vec(cart).map_err(CartsServiceError::Encode)?;

        self.store.set(session, CART_SESSION_KEY, bytes).await?;

        Ok(())
    }

    pub(crate) async fn clear(&self, session: &SessionId) -> Result<Cart, CartsServiceError> {
        let cart = Cart::default();

        self.save(session, &cart).await?;

        Ok(cart)
    }
}
