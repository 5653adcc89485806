//! Checkout errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{inventory::InventoryServiceError, products::records::ProductUuid};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("no client selected")]
    MissingClient,

    #[error("client not found")]
    ClientNotFound,

    #[error("delivery address is required")]
    MissingDeliveryAddress,

    #[error("payment method is required")]
    MissingPaymentMethod,

    #[error("payment receipt is empty")]
    EmptyReceipt,

    #[error("insufficient stock for product {product_uuid}: requested {requested}, available {available}")]
    InsufficientStock {
        product_uuid: ProductUuid,
        requested: u64,
        available: u64,
    },

    #[error("a product in the cart is no longer available")]
    ProductUnavailable,

    #[error("order totals overflow")]
    AmountOverflow,

    #[error("order already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CheckoutError {
    /// Whether the request was rejected before anything was written.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyCart
                | Self::MissingClient
                | Self::ClientNotFound
                | Self::MissingDeliveryAddress
                | Self::MissingPaymentMethod
                | Self::EmptyReceipt
                | Self::AmountOverflow
        )
    }
}

impl From<Error> for CheckoutError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::ColumnDecode { .. } | Error::Decode(_)) {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<InventoryServiceError> for CheckoutError {
    fn from(error: InventoryServiceError) -> Self {
        match error {
            InventoryServiceError::NotFound => Self::ProductUnavailable,
            InventoryServiceError::InsufficientStock {
                product_uuid,
                requested,
                available,
            } => Self::InsufficientStock {
                product_uuid,
                requested,
                available,
            },
            InventoryServiceError::InvalidData => Self::InvalidData,
            InventoryServiceError::Sql(source) => Self::Sql(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_product_row_means_product_unavailable() {
        assert!(matches!(
            CheckoutError::from(InventoryServiceError::NotFound),
            CheckoutError::ProductUnavailable
        ));
    }

    #[test]
    fn stock_shortfall_is_not_a_validation_error() {
        let error = CheckoutError::from(InventoryServiceError::InsufficientStock {
            product_uuid: ProductUuid::new(),
            requested: 2,
            available: 1,
        });

        assert!(!error.is_validation());
        assert!(CheckoutError::EmptyCart.is_validation());
    }
}
