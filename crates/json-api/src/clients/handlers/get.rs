//! Get Client Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::clients::records::ClientRecord;

use crate::{clients::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,

    /// First and last name joined for display
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    /// Default delivery address for portal orders
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClientRecord> for ClientResponse {
    fn from(client: ClientRecord) -> Self {
        Self {
            full_name: client.full_name(),
            uuid: client.uuid.into(),
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            address: client.address,
            created_at: client.created_at.to_string(),
            updated_at: client.updated_at.to_string(),
        }
    }
}

/// Get Client Handler
#[endpoint(tags("clients"), summary = "Get Client")]
pub(crate) async fn handler(
    client: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let client = state
        .app
        .clients
        .get_client(client.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.into()))
}
