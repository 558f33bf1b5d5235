//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::products::models::{ProductId, ProductUpdate};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        handlers::{ProductRequest, ProductResponse},
    },
    state::State,
};

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            code: request.code,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Product Update Handler
///
/// Replaces every field. `stock` is the new absolute level.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let product = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .products
        .update_product(
            ProductId::from_i64(product.into_inner()),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
