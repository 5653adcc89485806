//! Inventory Errors

use salvo::http::StatusError;
use tracing::error;

use vetshop_app::domain::inventory::InventoryServiceError;

pub(crate) fn into_status_error(error: InventoryServiceError) -> StatusError {
    match error {
        InventoryServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        InventoryServiceError::InsufficientStock { .. } => {
            StatusError::conflict().brief(error.to_string())
        }
        InventoryServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid stock quantity")
        }
        InventoryServiceError::Sql(source) => {
            error!("inventory storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
