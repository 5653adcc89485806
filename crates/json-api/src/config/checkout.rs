//! Checkout Config

use clap::Args;

use vetshop_app::domain::{
    checkout::{
        ChannelPolicy, CheckoutPolicy, TaxRate,
        policy::{DEFAULT_POINT_OF_SALE_ORDER_PREFIX, DEFAULT_PORTAL_ORDER_PREFIX},
    },
    inventory::policy::{DEFAULT_SERVICE_CATEGORY, StockPolicy},
    orders::status::OrderStatus,
};

/// Checkout settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Sales tax as a decimal fraction, e.g. `0.18`
    #[arg(long, env = "TAX_RATE")]
    pub tax_rate: TaxRate,

    /// Status given to new portal orders
    #[arg(long, env = "PORTAL_INITIAL_STATUS", default_value = "pending")]
    pub portal_initial_status: OrderStatus,

    /// Status given to new point-of-sale invoices
    #[arg(long, env = "POINT_OF_SALE_INITIAL_STATUS", default_value = "paid")]
    pub point_of_sale_initial_status: OrderStatus,

    /// Order number prefix for portal orders
    #[arg(long, env = "PORTAL_ORDER_PREFIX", default_value = DEFAULT_PORTAL_ORDER_PREFIX)]
    pub portal_order_prefix: String,

    /// Order number prefix for point-of-sale invoices
    #[arg(
        long,
        env = "POINT_OF_SALE_ORDER_PREFIX",
        default_value = DEFAULT_POINT_OF_SALE_ORDER_PREFIX
    )]
    pub point_of_sale_order_prefix: String,

    /// Product category sold without stock accounting
    #[arg(long, env = "SERVICE_CATEGORY", default_value = DEFAULT_SERVICE_CATEGORY)]
    pub service_category: String,
}

impl CheckoutConfig {
    /// Build the checkout policy shared by the checkout and inventory services.
    #[must_use]
    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            tax_rate: self.tax_rate,
            portal: ChannelPolicy {
                order_prefix: self.portal_order_prefix.clone(),
                initial_status: self.portal_initial_status,
            },
            point_of_sale: ChannelPolicy {
                order_prefix: self.point_of_sale_order_prefix.clone(),
                initial_status: self.point_of_sale_initial_status,
            },
            stock: StockPolicy::new(self.service_category.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use vetshop_app::domain::orders::status::OrderStatus;

    use crate::config::ServerConfig;

    const BASE: [&str; 3] = [
        "vetshop-json",
        "--database-url",
        "postgres://localhost/vetshop",
    ];

    fn parse(extra: &[&str]) -> Result<ServerConfig, clap::Error> {
        ServerConfig::try_parse_from(BASE.iter().chain(extra).copied())
    }

    #[test]
    fn defaults_follow_channel_conventions() -> TestResult {
        let policy = parse(&["--tax-rate", "0.18"])?.checkout.policy();

        assert_eq!(policy.tax_rate.to_string(), "0.18");
        assert_eq!(policy.portal.order_prefix, "ORD-");
        assert_eq!(policy.portal.initial_status, OrderStatus::Pending);
        assert_eq!(policy.point_of_sale.order_prefix, "INV-");
        assert_eq!(policy.point_of_sale.initial_status, OrderStatus::Paid);
        assert!(policy.stock.is_exempt("Service"));

        Ok(())
    }

    #[test]
    fn channel_rules_can_be_overridden() -> TestResult {
        let policy = parse(&[
            "--tax-rate",
            "0.16",
            "--portal-initial-status",
            "confirmed",
            "--point-of-sale-order-prefix",
            "BOL-",
            "--service-category",
            "consulta",
        ])?
        .checkout
        .policy();

        assert_eq!(policy.portal.initial_status, OrderStatus::Confirmed);
        assert_eq!(policy.point_of_sale.order_prefix, "BOL-");
        assert!(policy.stock.is_exempt("Consulta"));

        Ok(())
    }

    #[test]
    fn tax_rate_outside_unit_interval_is_rejected() {
        assert!(parse(&["--tax-rate", "1.5"]).is_err());
        assert!(parse(&["--tax-rate=-0.1"]).is_err());
        assert!(parse(&["--tax-rate", "eighteen"]).is_err());
    }

    #[test]
    fn unknown_initial_status_is_rejected() {
        assert!(parse(&["--tax-rate", "0.18", "--portal-initial-status", "shipped"]).is_err());
    }
}
