//! Inventory Handlers

pub(crate) mod low_stock;
pub(crate) mod restock;
pub(crate) mod set_stock;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Stock Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockQuantityRequest {
    /// Number of units
    pub quantity: u64,
}
