//! Checkout Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::customers::models::CustomerId;

use crate::{
    carts::errors::checkout_status_error, extensions::*, observability::observe_checkout,
    state::State,
};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutResponse {
    pub message: String,

    /// Identifier of the committed order
    pub order_id: i64,

    #[salvo(schema(value_type = String))]
    pub total_amount: Decimal,
}

/// Checkout Handler
///
/// Turns the session's cart into an order. Nothing is written and the cart is
/// kept when any line cannot be fulfilled.
#[endpoint(
    tags("cart"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer or product not found"),
        (status_code = StatusCode::CONFLICT, description = "Not enough stock"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Contended or timed out, safe to retry"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<i64>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let order = match state
        .app
        .checkout
        .checkout(CustomerId::from_i64(customer.into_inner()), session)
        .await
    {
        Ok(order) => order,
        Err(error) => {
            let category = error.category();

            observe_checkout(category.as_str());

            return Err(checkout_status_error(&error, res));
        }
    };

    observe_checkout("committed");

    info!(order = %order.order_id, "order placed");

    Ok(Json(CheckoutResponse {
        message: "Order placed successfully!".to_string(),
        order_id: order.order_id.into_i64(),
        total_amount: order.total_amount,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{
        domain::{
            carts::CartsServiceError,
            checkout::{CheckoutError, MockCheckoutService},
            orders::models::{Order, OrderId},
            products::models::ProductId,
        },
        session::{SessionId, SessionStoreError},
    };

    use crate::test_helpers::{Mocks, TEST_SESSION, service};

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        service(
            Mocks {
                checkout,
                ..Mocks::default()
            },
            Router::with_path("cart/checkout/{customer}").post(handler),
        )
    }

    fn failing(error: CheckoutError) -> MockCheckoutService {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_checkout()
            .once()
            .return_once(move |_, _| Err(error));

        checkout
    }

    #[tokio::test]
    async fn test_checkout_returns_order() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_checkout()
            .once()
            .withf(|customer, session| {
                *customer == CustomerId::from_i64(5) && *session == SessionId::from(TEST_SESSION)
            })
            .return_once(|customer, _| {
                Ok(Order {
                    order_id: OrderId::from_i64(42),
                    customer_id: customer,
                    order_date: Timestamp::UNIX_EPOCH,
                    total_amount: Decimal::new(2000, 2),
                    lines: Vec::new(),
                })
            });

        let mut res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(checkout))
            .await;

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order_id, 42);
        assert_eq!(body.total_amount, Decimal::new(2000, 2));
        assert_eq!(body.message, "Order placed successfully!");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::EmptyCart)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_shortfall_returns_409_with_message() -> TestResult {
        let mut res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::InsufficientStock {
                product: ProductId::from_i64(2),
                name: "Lamp".to_string(),
                available: 3,
                requested: 10,
            })))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert!(
            body.contains("Not enough stock for product Lamp. Available: 3, Requested: 10"),
            "unexpected body: {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_product_returns_404() -> TestResult {
        let res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::ProductNotFound(
                ProductId::from_i64(9),
            ))))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_customer_returns_404() -> TestResult {
        let res = TestClient::post("http://example.com/cart/checkout/404")
            .send(&make_service(failing(CheckoutError::CustomerNotFound)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_contention_returns_503_with_retry_after() -> TestResult {
        let res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::Contended(
                sqlx::Error::PoolTimedOut,
            ))))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(res.headers().contains_key("retry-after"), "expected retry-after");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_session_outage_returns_503() -> TestResult {
        let res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::Cart(
                CartsServiceError::Session(SessionStoreError::Unavailable("down".to_string())),
            ))))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_storage_failure_hides_detail() -> TestResult {
        let mut res = TestClient::post("http://example.com/cart/checkout/5")
            .send(&make_service(failing(CheckoutError::InvalidData)))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!body.contains("invalid data"), "detail leaked: {body}");

        Ok(())
    }
}
