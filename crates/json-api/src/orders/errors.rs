//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use vetshop_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidTransition(transition) => {
            StatusError::conflict().brief(transition.to_string())
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use vetshop_app::domain::orders::status::{InvalidTransition, OrderStatus};

    use super::*;

    #[test]
    fn invalid_transition_is_a_conflict_naming_both_states() {
        let error = into_status_error(OrdersServiceError::InvalidTransition(InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Confirmed,
        }));

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert_eq!(error.brief, "cannot move order from delivered to confirmed");
    }
}
