//! Inventory service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::records::ProductUuid;

#[derive(Debug, Error)]
pub enum InventoryServiceError {
    #[error("product not found")]
    NotFound,

    #[error("insufficient stock for product {product_uuid}: requested {requested}, available {available}")]
    InsufficientStock {
        product_uuid: ProductUuid,
        requested: u64,
        available: u64,
    },

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for InventoryServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
