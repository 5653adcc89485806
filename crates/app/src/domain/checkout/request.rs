//! Checkout Request

use crate::domain::{
    clients::records::ClientUuid,
    orders::{channel::SalesChannel, data::NewPaymentReceipt},
};

/// What the caller supplies alongside the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub channel: SalesChannel,
    pub client_uuid: Option<ClientUuid>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub receipt: Option<ReceiptUpload>,
}

/// Proof of payment (transfer screenshot, voucher scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl From<ReceiptUpload> for NewPaymentReceipt {
    fn from(upload: ReceiptUpload) -> Self {
        Self {
            content_type: upload.content_type,
            data: upload.data,
        }
    }
}
