//! Clinic Sales Domain Concerns

pub mod carts;
pub mod checkout;
pub mod clients;
pub mod inventory;
pub mod orders;
pub mod products;
