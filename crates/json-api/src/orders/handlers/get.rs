//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::orders::records::{OrderLineRecord, OrderRecord};

use crate::{extensions::*, orders::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    /// Channel prefix followed by the creation time in epoch milliseconds
    pub order_number: String,

    /// `portal` or `point_of_sale`
    pub channel: String,
    pub client_uuid: Uuid,
    pub delivery_address: Option<String>,

    /// Sum of line totals in minor units
    pub subtotal: u64,
    pub tax_amount: u64,
    pub total_amount: u64,
    pub status: String,
    pub payment_method: String,
    pub notes: Option<String>,

    /// Set when a payment receipt was uploaded at checkout
    pub receipt_key: Option<String>,
    pub lines: Vec<OrderLineResponse>,
    pub created_at: String,
    pub updated_at: String,
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// Product name at the time of sale
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub total_price: u64,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        Self {
            uuid: line.uuid.into(),
            product_uuid: line.product_uuid.into(),
            name: line.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            total_price: line.total_price,
        }
    }
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            order_number: order.order_number,
            channel: order.channel.to_string(),
            client_uuid: order.client_uuid.into(),
            delivery_address: order.delivery_address,
            subtotal: order.subtotal,
            tax_amount: order.tax_amount,
            total_amount: order.total_amount,
            status: order.status.to_string(),
            payment_method: order.payment_method,
            notes: order.notes,
            receipt_key: order.receipt_key,
            lines: order.lines.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns the order header with its lines.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
