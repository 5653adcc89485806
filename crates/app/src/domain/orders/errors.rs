//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::orders::status::InvalidTransition;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::orders::status::OrderStatus;

    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            OrdersServiceError::from(Error::RowNotFound),
            OrdersServiceError::NotFound
        ));
    }

    #[test]
    fn invalid_transition_keeps_both_states_in_message() {
        let error = OrdersServiceError::from(InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        });

        assert_eq!(
            error.to_string(),
            "cannot move order from delivered to pending"
        );
    }
}
