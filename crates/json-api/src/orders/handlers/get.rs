//! Get Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::models::{Order, OrderId, OrderLine};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub order_id: i64,

    pub customer_id: i64,

    /// RFC 3339 timestamp of the checkout
    pub order_date: String,

    #[salvo(schema(value_type = String))]
    pub total_amount: Decimal,

    pub lines: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id.into_i64(),
            customer_id: order.customer_id.into_i64(),
            order_date: order.order_date.to_string(),
            total_amount: order.total_amount,
            lines: order.lines.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLineResponse {
    pub product_id: i64,

    pub quantity: u32,

    #[salvo(schema(value_type = String))]
    pub line_total: Decimal,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id.into_i64(),
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order with its lines"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let order = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .orders
        .get_order(OrderId::from_i64(order.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        customers::models::CustomerId,
        orders::{MockOrdersService, OrdersServiceError},
        products::models::ProductId,
    };

    use crate::test_helpers::{Mocks, service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("orders/{order}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_order_includes_lines_in_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(|id| *id == OrderId::from_i64(12))
            .return_once(|order_id| {
                Ok(Order {
                    order_id,
                    customer_id: CustomerId::from_i64(1),
                    order_date: Timestamp::UNIX_EPOCH,
                    total_amount: Decimal::new(2450, 2),
                    lines: vec![
                        OrderLine {
                            order_id,
                            product_id: ProductId::from_i64(2),
                            quantity: 2,
                            line_total: Decimal::new(2000, 2),
                        },
                        OrderLine {
                            order_id,
                            product_id: ProductId::from_i64(1),
                            quantity: 1,
                            line_total: Decimal::new(450, 2),
                        },
                    ],
                })
            });

        let body: OrderResponse = TestClient::get("http://example.com/orders/12")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        let products: Vec<i64> = body.lines.iter().map(|line| line.product_id).collect();

        assert_eq!(body.order_id, 12);
        assert_eq!(body.total_amount, Decimal::new(2450, 2));
        assert_eq!(products, vec![2, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::get("http://example.com/orders/404")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
