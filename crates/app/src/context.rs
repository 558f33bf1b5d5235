//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database::{self, CheckoutTimeouts, Db},
    domain::{
        carts::{CartsService, SessionCartsService},
        checkout::{CheckoutEngine, CheckoutService, PgCheckoutStore},
        customers::{CustomersService, PgCustomersService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
    session::{MemorySessionStore, SessionStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub orders: Arc<dyn OrdersService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Connect to the database, apply migrations and wire every service.
    ///
    /// Carts live in an in-process session store that forgets sessions idle
    /// for longer than `session_idle_timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn connect(
        url: &str,
        timeouts: CheckoutTimeouts,
        session_idle_timeout: Duration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);
        let sessions: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::new(session_idle_timeout));

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            carts: Arc::new(SessionCartsService::new(Arc::clone(&sessions))),
            checkout: Arc::new(CheckoutEngine::new(
                PgCheckoutStore::new(db, timeouts),
                Arc::clone(&sessions),
                timeouts.overall,
            )),
            sessions,
        })
    }
}
