//! Orders

pub mod channel;
pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;
pub mod status;

pub use errors::OrdersServiceError;
pub(crate) use repositories::{PgOrderLinesRepository, PgOrdersRepository, PgReceiptsRepository};
pub use service::*;
