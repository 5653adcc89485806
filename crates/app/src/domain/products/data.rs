//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub category: String,
    pub price: u64,
    pub stock_quantity: u64,
    pub low_stock_threshold: u64,
}

/// Product Update Data
///
/// Stock is deliberately absent; it moves through checkout and the inventory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub low_stock_threshold: u64,
}
