//! Cart and Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use vetshop_app::domain::{carts::CartsServiceError, checkout::CheckoutError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::CorruptSnapshot(source) => {
            error!("cart snapshot could not be decoded: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Validation failures are 422, stock and concurrency conflicts 409.
pub(crate) fn checkout_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::EmptyCart
        | CheckoutError::MissingClient
        | CheckoutError::ClientNotFound
        | CheckoutError::MissingDeliveryAddress
        | CheckoutError::MissingPaymentMethod
        | CheckoutError::EmptyReceipt
        | CheckoutError::AmountOverflow => {
            StatusError::unprocessable_entity().brief(error.to_string())
        }
        CheckoutError::InsufficientStock { .. }
        | CheckoutError::ProductUnavailable
        | CheckoutError::AlreadyExists
        | CheckoutError::InvalidReference => StatusError::conflict().brief(error.to_string()),
        CheckoutError::InvalidData => StatusError::bad_request().brief("Invalid checkout data"),
        CheckoutError::Sql(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use vetshop_app::domain::products::records::ProductUuid;

    use super::*;

    #[test]
    fn validation_failures_are_unprocessable() {
        for error in [
            CheckoutError::EmptyCart,
            CheckoutError::MissingClient,
            CheckoutError::ClientNotFound,
            CheckoutError::MissingDeliveryAddress,
            CheckoutError::MissingPaymentMethod,
        ] {
            assert_eq!(
                checkout_status_error(error).code,
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn stock_shortfall_is_a_conflict() {
        let error = checkout_status_error(CheckoutError::InsufficientStock {
            product_uuid: ProductUuid::new(),
            requested: 2,
            available: 1,
        });

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert!(error.brief.contains("requested 2, available 1"), "{}", error.brief);
    }

    #[test]
    fn storage_failures_are_internal() {
        assert_eq!(
            checkout_status_error(CheckoutError::Sql(sqlx::Error::PoolTimedOut)).code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            into_status_error(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)).code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
