//! Inventory Records

use crate::domain::products::records::ProductUuid;

/// Stock movement applied to one product by a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockAdjustment {
    pub product_uuid: ProductUuid,
    pub sold: u64,
    pub remaining: u64,
}
