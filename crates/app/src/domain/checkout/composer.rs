//! Order Composer
//!
//! Builds the order header and lines for a validated cart. Nothing here touches the
//! database; the payer's existence is checked by the caller beforehand.

use jiff::Timestamp;

use crate::domain::{
    carts::cart::Cart,
    clients::records::ClientUuid,
    orders::{
        channel::SalesChannel,
        data::{NewOrder, NewOrderLine, NewPaymentReceipt},
        records::{OrderLineUuid, OrderUuid},
    },
};

use super::{
    errors::CheckoutError,
    policy::{CheckoutPolicy, DEFAULT_POINT_OF_SALE_PAYMENT_METHOD},
    request::CheckoutRequest,
    totals::OrderTotals,
};

/// Everything a successful checkout writes.
#[derive(Debug, Clone)]
pub(crate) struct ComposedOrder {
    pub(crate) order: NewOrder,
    pub(crate) receipt: Option<NewPaymentReceipt>,
}

/// The first two preconditions: a non-empty cart and a named payer.
pub(crate) fn require_cart_and_client(
    cart: &Cart,
    request: &CheckoutRequest,
) -> Result<ClientUuid, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    request.client_uuid.ok_or(CheckoutError::MissingClient)
}

pub(crate) fn compose_order(
    cart: &Cart,
    request: CheckoutRequest,
    client: ClientUuid,
    policy: &CheckoutPolicy,
    now: Timestamp,
) -> Result<ComposedOrder, CheckoutError> {
    let delivery_address = non_blank(request.delivery_address);
    let payment_method = non_blank(request.payment_method);

    let payment_method = match request.channel {
        SalesChannel::Portal => {
            if delivery_address.is_none() {
                return Err(CheckoutError::MissingDeliveryAddress);
            }

            payment_method.ok_or(CheckoutError::MissingPaymentMethod)?
        }
        SalesChannel::PointOfSale => payment_method
            .unwrap_or_else(|| DEFAULT_POINT_OF_SALE_PAYMENT_METHOD.to_owned()),
    };

    let receipt = match request.receipt {
        Some(upload) if upload.data.is_empty() => return Err(CheckoutError::EmptyReceipt),
        Some(upload) => Some(NewPaymentReceipt::from(upload)),
        None => None,
    };

    let lines: Vec<NewOrderLine> = cart
        .lines()
        .iter()
        .map(|line| -> Result<NewOrderLine, CheckoutError> {
            Ok(NewOrderLine {
                uuid: OrderLineUuid::new(),
                product_uuid: line.product_uuid,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                total_price: line
                    .unit_price
                    .checked_mul(line.quantity)
                    .ok_or(CheckoutError::AmountOverflow)?,
            })
        })
        .collect::<Result<_, _>>()?;

    let totals = OrderTotals::compute(lines.iter().map(|l| l.total_price), policy.tax_rate)
        .ok_or(CheckoutError::AmountOverflow)?;

    let channel = policy.channel(request.channel);

    Ok(ComposedOrder {
        order: NewOrder {
            uuid: OrderUuid::new(),
            order_number: channel.order_number(now),
            channel: request.channel,
            client_uuid: client,
            delivery_address,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total_amount: totals.total_amount,
            status: channel.initial_status,
            payment_method,
            notes: non_blank(request.notes),
            lines,
        },
        receipt,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
