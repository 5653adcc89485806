//! Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vetshop_app::domain::orders::status::OrderStatus;

use crate::{
    extensions::*,
    orders::{get::OrderResponse, into_status_error},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Lists orders, optionally only those in one status.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .map(|value| value.parse::<OrderStatus>())
        .transpose()
        .or_400("invalid status filter")?;

    let orders = state
        .app
        .orders
        .list_orders(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
