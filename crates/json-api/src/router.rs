//! App Router

use salvo::Router;

use crate::{carts, customers, orders, products, session};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .hoop(session::middleware::handler)
                .get(carts::handlers::get::handler)
                .push(Router::with_path("add").post(carts::handlers::add::handler))
                .push(Router::with_path("update/{product}").put(carts::handlers::update::handler))
                .push(
                    Router::with_path("remove/{product}").delete(carts::handlers::remove::handler),
                )
                .push(Router::with_path("clear").delete(carts::handlers::clear::handler))
                .push(
                    Router::with_path("checkout/{customer}")
                        .post(carts::handlers::checkout::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .post(products::handlers::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::handlers::get::handler)
                        .put(products::handlers::update::handler),
                ),
        )
        .push(
            Router::with_path("customers")
                .post(customers::handlers::create::handler)
                .push(Router::with_path("{customer}").get(customers::handlers::get::handler)),
        )
        .push(Router::with_path("orders/{order}").get(orders::handlers::get::handler))
}
