//! Checkout
//!
//! Turns a cart into a persisted order: validation, totals, order numbering and the
//! single transaction that writes the order and takes stock.

mod composer;
pub mod errors;
pub mod policy;
pub mod request;
pub mod service;
pub mod store;
pub mod totals;

pub use errors::CheckoutError;
pub use policy::{ChannelPolicy, CheckoutPolicy};
pub use request::{CheckoutRequest, ReceiptUpload};
pub use service::*;
pub use store::{CheckoutStore, MockCheckoutStore, PgCheckoutStore};
pub use totals::{OrderTotals, TaxRate};
