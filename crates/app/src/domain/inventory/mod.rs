//! Inventory

pub mod errors;
pub mod policy;
pub mod records;
mod repository;
pub mod service;
mod updater;

pub use errors::InventoryServiceError;
pub use service::*;
pub(crate) use updater::StockUpdater;
