//! Get Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::customers::models::CustomerId;

use crate::{
    customers::{errors::into_status_error, handlers::CustomerResponse},
    extensions::*,
    state::State,
};

/// Get Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let customer = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .customers
        .get_customer(CustomerId::from_i64(customer.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
