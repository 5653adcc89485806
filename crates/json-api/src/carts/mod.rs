//! Carts

mod errors;
mod handlers;
pub(crate) mod items;

pub(crate) use errors::{checkout_status_error, into_status_error};
pub(crate) use handlers::*;
