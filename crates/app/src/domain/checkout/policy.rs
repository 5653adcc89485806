//! Checkout Policy
//!
//! Per-channel business rules that are configured rather than hard-coded.

use jiff::Timestamp;

use crate::domain::{
    inventory::policy::StockPolicy,
    orders::{channel::SalesChannel, status::OrderStatus},
};

use super::totals::TaxRate;

pub const DEFAULT_PORTAL_ORDER_PREFIX: &str = "ORD-";
pub const DEFAULT_POINT_OF_SALE_ORDER_PREFIX: &str = "INV-";

/// Payment method recorded for counter sales that name none.
pub const DEFAULT_POINT_OF_SALE_PAYMENT_METHOD: &str = "cash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPolicy {
    pub order_prefix: String,
    pub initial_status: OrderStatus,
}

impl ChannelPolicy {
    /// `prefix` followed by the Unix epoch in milliseconds.
    #[must_use]
    pub fn order_number(&self, now: Timestamp) -> String {
        format!("{}{}", self.order_prefix, now.as_millisecond())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPolicy {
    pub tax_rate: TaxRate,
    pub portal: ChannelPolicy,
    pub point_of_sale: ChannelPolicy,
    pub stock: StockPolicy,
}

impl CheckoutPolicy {
    /// Default channel rules around a tax rate, which has no default of its own.
    #[must_use]
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            tax_rate,
            portal: ChannelPolicy {
                order_prefix: DEFAULT_PORTAL_ORDER_PREFIX.to_owned(),
                initial_status: OrderStatus::Pending,
            },
            point_of_sale: ChannelPolicy {
                order_prefix: DEFAULT_POINT_OF_SALE_ORDER_PREFIX.to_owned(),
                initial_status: OrderStatus::Paid,
            },
            stock: StockPolicy::default(),
        }
    }

    #[must_use]
    pub fn channel(&self, channel: SalesChannel) -> &ChannelPolicy {
        match channel {
            SalesChannel::Portal => &self.portal,
            SalesChannel::PointOfSale => &self.point_of_sale,
        }
    }
}
