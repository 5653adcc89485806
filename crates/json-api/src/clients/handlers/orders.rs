//! Client Orders Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{index::OrdersResponse, into_status_error},
    state::State,
};

/// Client Orders Handler
///
/// A client's order history, newest first. Unknown clients have no orders.
#[endpoint(tags("clients"), summary = "List Client Orders")]
pub(crate) async fn handler(
    client: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_client_orders(client.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
