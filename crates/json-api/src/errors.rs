//! Error categories as HTTP responses.

use std::error::Error;

use salvo::http::{Response, StatusError, header::RETRY_AFTER};
use storefront_app::errors::ErrorCategory;
use tracing::{error, warn};

/// Seconds a client should wait before retrying a transient failure.
const RETRY_AFTER_SECS: &str = "1";

/// Render a categorised service error.
///
/// Only the 4xx briefs carry the error's message. Transient failures get a
/// `Retry-After` header and unexpected ones a generic body, with the detail
/// kept in the logs.
pub(crate) fn category_status_error<E: Error>(
    category: ErrorCategory,
    error: &E,
    res: &mut Response,
) -> StatusError {
    match category {
        ErrorCategory::InvalidState => StatusError::bad_request().brief(error.to_string()),
        ErrorCategory::NotFound => StatusError::not_found().brief(error.to_string()),
        ErrorCategory::InsufficientStock => StatusError::conflict().brief(error.to_string()),
        ErrorCategory::Transient => {
            warn!("transient failure: {error}");

            if let Err(header_error) = res.add_header(RETRY_AFTER, RETRY_AFTER_SECS, true) {
                warn!("failed to set retry-after header: {header_error}");
            }

            StatusError::service_unavailable().brief("Temporarily unavailable, please retry.")
        }
        ErrorCategory::Unexpected => {
            error!("unexpected failure: {error:?}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("Not enough stock for product Lamp. Available: 3, Requested: 10")]
    struct Shortfall;

    #[test]
    fn categories_map_to_status_codes() {
        let cases = [
            (ErrorCategory::InvalidState, StatusCode::BAD_REQUEST),
            (ErrorCategory::NotFound, StatusCode::NOT_FOUND),
            (ErrorCategory::InsufficientStock, StatusCode::CONFLICT),
            (ErrorCategory::Transient, StatusCode::SERVICE_UNAVAILABLE),
            (ErrorCategory::Unexpected, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (category, expected) in cases {
            let mut res = Response::new();

            let status = category_status_error(category, &Shortfall, &mut res);

            assert_eq!(status.code, expected, "{category}");
        }
    }

    #[test]
    fn shortfall_message_is_passed_through_verbatim() {
        let mut res = Response::new();

        let status = category_status_error(ErrorCategory::InsufficientStock, &Shortfall, &mut res);

        assert_eq!(
            status.brief,
            "Not enough stock for product Lamp. Available: 3, Requested: 10"
        );
    }

    #[test]
    fn transient_failures_ask_clients_to_retry() {
        let mut res = Response::new();

        let _status = category_status_error(ErrorCategory::Transient, &Shortfall, &mut res);

        let retry_after = res
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok());

        assert_eq!(retry_after, Some("1"));
    }

    #[test]
    fn unexpected_failures_hide_detail() {
        let mut res = Response::new();

        let status = category_status_error(ErrorCategory::Unexpected, &Shortfall, &mut res);

        assert!(!status.brief.contains("Lamp"), "detail leaked: {}", status.brief);
    }
}
