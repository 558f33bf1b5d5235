//! Add Cart Item Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::{carts::models::NewCartLine, products::models::ProductId};

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_id: i64,

    pub name: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub quantity: u32,
}

impl From<AddCartItemRequest> for NewCartLine {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartLine {
            product_id: ProductId::from_i64(request.product_id),
            name: request.name,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds a product line, or increases the quantity of an existing one. Stock is
/// only checked at checkout.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let cart = state
        .app
        .carts
        .add_item(session, json.into_inner().into())
        .await
        .map_err(|error| into_status_error(&error, res))?;

    let body = CartResponse::new(cart, Some("Product added to cart successfully."))
        .map_err(|error| into_status_error(&error, res))?;

    Ok(Json(body))
}
