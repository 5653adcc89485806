//! Low Stock Report Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, inventory::into_status_error, products::get::ProductResponse, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LowStockResponse {
    /// Stocked products at or below their reorder threshold, lowest stock first
    pub products: Vec<ProductResponse>,
}

/// Low Stock Report Handler
#[endpoint(tags("inventory"), summary = "Low Stock Report")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LowStockResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .inventory
        .low_stock()
        .await
        .map_err(into_status_error)?;

    Ok(Json(LowStockResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
