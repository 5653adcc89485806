//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::orders::status::RequestedStatus;

use crate::{
    extensions::*,
    orders::{get::OrderResponse, into_status_error},
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// Target status; `shipped` is recorded as `delivered`
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves the order along its fulfilment path. Backwards moves, exits from delivered or
/// cancelled orders and self-transitions are rejected with 409.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let requested = json
        .into_inner()
        .status
        .parse::<RequestedStatus>()
        .or_400("invalid status")?;

    let order = state
        .app
        .orders
        .update_status(order.into_inner().into(), requested)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
