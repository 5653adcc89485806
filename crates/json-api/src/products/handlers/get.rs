//! Get Product Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::products::records::ProductRecord;

use crate::{extensions::*, products::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Catalogue category; the service category is sold without stock
    pub category: String,

    /// Unit price in minor units
    pub price: u64,

    /// Units on hand
    pub stock_quantity: u64,

    /// Reorder threshold
    pub low_stock_threshold: u64,

    /// Whether stock is at or below the reorder threshold
    pub low_stock: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// The date and time the product was deleted
    pub deleted_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            low_stock: product.is_low_stock(),
            uuid: product.uuid.into(),
            name: product.name,
            category: product.category,
            price: product.price,
            stock_quantity: product.stock_quantity,
            low_stock_threshold: product.low_stock_threshold,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
