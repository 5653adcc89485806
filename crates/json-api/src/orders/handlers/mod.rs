//! Order Handlers

pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod receipt;
pub(crate) mod status;
