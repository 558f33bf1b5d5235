//! Get Cart Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::{
    CartsServiceError,
    models::{Cart, CartLine},
};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Lines in the order they were first added
    pub items: Vec<CartLineResponse>,

    /// Sum of every line total
    #[salvo(schema(value_type = String))]
    pub total: Decimal,

    /// Sum of every line quantity
    pub total_quantity: u64,

    /// Outcome of the operation, or a marker for an empty cart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CartResponse {
    /// Fails when a line or the total does not fit an order amount.
    pub(crate) fn new(cart: Cart, message: Option<&str>) -> Result<Self, CartsServiceError> {
        let message = message
            .or_else(|| cart.is_empty().then_some(EMPTY_CART_MESSAGE))
            .map(str::to_string);

        Ok(Self {
            total: cart.total().ok_or(CartsServiceError::AmountOutOfRange)?,
            total_quantity: cart.total_quantity(),
            items: cart
                .lines
                .into_iter()
                .map(CartLineResponse::try_from)
                .collect::<Result<_, _>>()?,
            message,
        })
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    pub product_id: i64,

    pub name: String,

    /// Unit price captured when the product was first added
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub quantity: u32,

    #[salvo(schema(value_type = String))]
    pub line_total: Decimal,
}

impl TryFrom<CartLine> for CartLineResponse {
    type Error = CartsServiceError;

    fn try_from(line: CartLine) -> Result<Self, Self::Error> {
        Ok(Self {
            line_total: line
                .line_total()
                .ok_or(CartsServiceError::AmountOutOfRange)?,
            product_id: line.product_id.into_i64(),
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        })
    }
}

/// Get Cart Handler
///
/// Returns the session's cart. A session without one gets an empty cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Session store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let cart = state
        .app
        .carts
        .get_cart(session)
        .await
        .map_err(|error| into_status_error(&error, res))?;

    let body = CartResponse::new(cart, None).map_err(|error| into_status_error(&error, res))?;

    Ok(Json(body))
}
