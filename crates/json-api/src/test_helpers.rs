//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService, checkout::MockCheckoutService, customers::MockCustomersService,
        orders::MockOrdersService, products::MockProductsService,
    },
    session::{MemorySessionStore, SessionId},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SESSION: &str = "test-session";

pub(crate) const TEST_COOKIE: &str = "storefront_session";

/// One mock per service. Defaults reject every call.
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) customers: MockCustomersService,
    pub(crate) orders: MockOrdersService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout: MockCheckoutService,
}

impl Default for Mocks {
    fn default() -> Self {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_update_product().never();

        let mut customers = MockCustomersService::new();

        customers.expect_create_customer().never();
        customers.expect_get_customer().never();

        let mut orders = MockOrdersService::new();

        orders.expect_get_order().never();

        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_update_item().never();
        carts.expect_remove_item().never();
        carts.expect_clear_cart().never();

        let mut checkout = MockCheckoutService::new();

        checkout.expect_checkout().never();

        Self {
            products,
            customers,
            orders,
            carts,
            checkout,
        }
    }
}

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_id(SessionId::from(TEST_SESSION));
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn state_with(mocks: Mocks) -> Arc<State> {
    let app = AppContext {
        products: Arc::new(mocks.products),
        customers: Arc::new(mocks.customers),
        orders: Arc::new(mocks.orders),
        carts: Arc::new(mocks.carts),
        checkout: Arc::new(mocks.checkout),
        sessions: Arc::new(MemorySessionStore::default()),
    };

    State::from_app_context(app, TEST_COOKIE.to_string())
}

pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(mocks)))
            .hoop(inject_session)
            .push(route),
    )
}
