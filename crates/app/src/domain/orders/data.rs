//! Order Data

use crate::domain::{
    clients::records::ClientUuid,
    orders::{
        channel::SalesChannel,
        records::{OrderLineUuid, OrderUuid},
        status::OrderStatus,
    },
    products::records::ProductUuid,
};

/// New Order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub channel: SalesChannel,
    pub client_uuid: ClientUuid,
    pub delivery_address: Option<String>,
    pub subtotal: u64,
    pub tax_amount: u64,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub notes: Option<String>,
    pub lines: Vec<NewOrderLine>,
}

/// New Order Line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub uuid: OrderLineUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub total_price: u64,
}

/// Payment proof uploaded alongside a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentReceipt {
    pub content_type: String,
    pub data: Vec<u8>,
}
