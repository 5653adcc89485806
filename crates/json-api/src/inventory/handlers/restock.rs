//! Restock Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    inventory::{StockQuantityRequest, into_status_error},
    products::get::ProductResponse,
    state::State,
};

/// Restock Handler
///
/// Adds received units to the product's stock.
#[endpoint(
    tags("inventory"),
    summary = "Restock Product",
    responses(
        (status_code = StatusCode::OK, description = "Stock increased"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<StockQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let received = json.into_inner().quantity;

    let product = state
        .app
        .inventory
        .restock(product.into_inner().into(), received)
        .await
        .map_err(into_status_error)?;

    info!(
        product_uuid = %product.uuid,
        received,
        stock_quantity = product.stock_quantity,
        request_id = depot.request_id(),
        "product restocked"
    );

    Ok(Json(product.into()))
}
