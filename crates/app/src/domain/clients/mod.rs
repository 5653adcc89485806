//! Clients

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ClientsServiceError;
pub(crate) use repository::PgClientsRepository;
pub use service::*;
