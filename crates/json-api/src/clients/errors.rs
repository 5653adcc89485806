//! Client Errors

use salvo::http::StatusError;
use tracing::error;

use vetshop_app::domain::clients::ClientsServiceError;

pub(crate) fn into_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Client already exists")
        }
        ClientsServiceError::NotFound => StatusError::not_found().brief("Client not found"),
        ClientsServiceError::MissingRequiredData | ClientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid client payload")
        }
        ClientsServiceError::Sql(source) => {
            error!("client storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
