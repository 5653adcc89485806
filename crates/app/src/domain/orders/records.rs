//! Order Records

use jiff::Timestamp;

use crate::{
    domain::{
        clients::records::ClientUuid,
        orders::{channel::SalesChannel, status::OrderStatus},
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
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
    pub receipt_key: Option<String>,
    pub lines: Vec<OrderLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Order Line Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub total_price: u64,
}

/// Payment Receipt Record
#[derive(Debug, Clone)]
pub struct PaymentReceiptRecord {
    pub order_uuid: OrderUuid,
    pub key: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: Timestamp,
}

/// Storage key for an order's payment receipt.
#[must_use]
pub fn receipt_key(order: OrderUuid) -> String {
    format!("receipt-{order}")
}
