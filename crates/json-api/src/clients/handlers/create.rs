//! Create Client Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::clients::data::NewClient;

use crate::{
    clients::{get::ClientResponse, into_status_error},
    extensions::*,
    state::State,
};

/// Create Client Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateClientRequest {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(request: CreateClientRequest) -> Self {
        NewClient {
            uuid: request.uuid.into(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}

/// Create Client Handler
#[endpoint(
    tags("clients"),
    summary = "Create Client",
    responses(
        (status_code = StatusCode::CREATED, description = "Client created"),
        (status_code = StatusCode::CONFLICT, description = "Client already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateClientRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let client = state
        .app
        .clients
        .create_client(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/clients/{}", client.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(client.into()))
}
