//! Create Customer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::customers::models::NewCustomer;

use crate::{
    customers::{errors::into_status_error, handlers::CustomerResponse},
    extensions::*,
    state::State,
};

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    pub name: String,

    pub email: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            name: request.name,
            email: request.email,
        }
    }
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = 201, description = "Customer created"),
        (status_code = 409, description = "Email is already registered"),
        (status_code = 400, description = "Bad Request"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, StatusError> {
    let request = json.into_inner();

    if request.name.trim().is_empty() || !request.email.contains('@') {
        return Err(StatusError::bad_request().brief("Invalid customer payload"));
    }

    let customer = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .customers
        .create_customer(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/customers/{}", customer.customer_id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(customer.into()))
}
