//! Errors

use salvo::http::{Response, StatusError};

use storefront_app::domain::{carts::CartsServiceError, checkout::CheckoutError};

use crate::errors::category_status_error;

pub(crate) fn into_status_error(error: &CartsServiceError, res: &mut Response) -> StatusError {
    category_status_error(error.category(), error, res)
}

pub(crate) fn checkout_status_error(error: &CheckoutError, res: &mut Response) -> StatusError {
    category_status_error(error.category(), error, res)
}
