//! Checkout Handler

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use vetshop_app::domain::{
    checkout::{CheckoutRequest, ReceiptUpload},
    orders::channel::SalesChannel,
};

use crate::{
    carts::checkout_status_error,
    extensions::*,
    observability::observe_checkout,
    orders::get::OrderResponse,
    state::State,
};

/// Where the sale was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ChannelRequest {
    /// Client self-service; needs a delivery address
    Portal,

    /// Counter sale by staff for a selected client
    PointOfSale,
}

impl From<ChannelRequest> for SalesChannel {
    fn from(channel: ChannelRequest) -> Self {
        match channel {
            ChannelRequest::Portal => SalesChannel::Portal,
            ChannelRequest::PointOfSale => SalesChannel::PointOfSale,
        }
    }
}

/// Payment receipt upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptRequest {
    pub content_type: String,

    /// Standard base64 with padding
    pub data: String,
}

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequestBody {
    pub channel: ChannelRequest,
    pub client_uuid: Option<Uuid>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub receipt: Option<ReceiptRequest>,
}

/// Checkout Handler
///
/// Turns the cart into an order, takes stock for every line and empties the cart.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
        (status_code = StatusCode::PAYLOAD_TOO_LARGE, description = "Receipt too large"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Checkout rejected"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CheckoutRequestBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = json.into_inner();
    let channel = SalesChannel::from(body.channel);

    let receipt = match body.receipt {
        Some(receipt) => {
            let data = STANDARD
                .decode(receipt.data.as_bytes())
                .or_400("receipt data is not valid base64")?;

            if data.len() > state.max_receipt_bytes {
                return Err(StatusError::payload_too_large().brief(format!(
                    "receipt exceeds {} bytes",
                    state.max_receipt_bytes
                )));
            }

            Some(ReceiptUpload {
                content_type: receipt.content_type,
                data,
            })
        }
        None => None,
    };

    let request = CheckoutRequest {
        channel,
        client_uuid: body.client_uuid.map(Into::into),
        delivery_address: body.delivery_address,
        payment_method: body.payment_method,
        notes: body.notes,
        receipt,
    };

    let order = match state
        .app
        .checkout
        .checkout(cart.into_inner().into(), request)
        .await
    {
        Ok(order) => order,
        Err(error) => {
            let outcome = if error.is_validation() {
                "rejected"
            } else {
                "failed"
            };

            observe_checkout(channel.as_str(), outcome);

            return Err(checkout_status_error(error));
        }
    };

    observe_checkout(channel.as_str(), "completed");

    info!(
        request_id = depot.request_id(),
        order_number = %order.order_number,
        channel = %channel,
        total_amount = order.total_amount,
        "order created",
    );

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
