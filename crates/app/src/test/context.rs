//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    database::{CheckoutTimeouts, Db},
    domain::{
        carts::SessionCartsService,
        checkout::{CheckoutEngine, PgCheckoutService, PgCheckoutStore},
        customers::PgCustomersService,
        orders::PgOrdersService,
        products::PgProductsService,
    },
    session::{MemorySessionStore, SessionStore},
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub customers: PgCustomersService,
    pub orders: PgOrdersService,
    pub carts: SessionCartsService,
    pub checkout: PgCheckoutService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::default());
        let timeouts = CheckoutTimeouts::default();

        Self {
            products: PgProductsService::new(db.clone()),
            customers: PgCustomersService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            carts: SessionCartsService::new(Arc::clone(&sessions)),
            checkout: CheckoutEngine::new(
                PgCheckoutStore::new(db, timeouts),
                sessions,
                timeouts.overall,
            ),
            db: test_db,
        }
    }
}
