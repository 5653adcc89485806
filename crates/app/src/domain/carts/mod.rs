//! Carts

pub mod cart;
pub mod errors;
mod repository;
pub mod service;

pub use errors::CartsServiceError;
pub(crate) use repository::PgCartSnapshotsRepository;
pub use service::*;
