//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::products::models::ProductId;

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Handler
///
/// Sets the quantity of a line. The body is a bare integer; zero or less
/// removes the line.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not in cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    quantity: JsonBody<i64>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let cart = state
        .app
        .carts
        .update_item(
            session,
            ProductId::from_i64(product.into_inner()),
            quantity.into_inner(),
        )
        .await
        .map_err(|error| into_status_error(&error, res))?;

    let body = CartResponse::new(cart, Some("Cart item updated successfully."))
        .map_err(|error| into_status_error(&error, res))?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{Mocks, service};

    use super::{super::tests::make_cart, *};

    fn make_service(carts: MockCartsService) -> Service {
        service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            Router::with_path("cart/update/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_sets_quantity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(|_, product, quantity| *product == ProductId::from_i64(4) && *quantity == 5)
            .return_once(|_, _, _| Ok(make_cart(&[(4, "Lamp", Decimal::TWO, 5)])));

        let mut res = TestClient::put("http://example.com/cart/update/4")
            .json(&5)
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total_quantity, 5);
        assert_eq!(body.message.as_deref(), Some("Cart item updated successfully."));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_line_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .return_once(|_, product, _| Err(CartsServiceError::NotFound(product)));

        let res = TestClient::put("http://example.com/cart/update/99")
            .json(&1)
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_negative_quantity_is_forwarded() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(|_, _, quantity| *quantity == -1)
            .return_once(|_, _, _| Ok(make_cart(&[])));

        let res = TestClient::put("http://example.com/cart/update/4")
            .json(&-1)
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
