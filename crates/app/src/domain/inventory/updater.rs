//! Stock Updater
//!
//! Applies the stock side of a sale inside the caller's transaction. Rows are locked
//! in UUID order so concurrent sales of overlapping products cannot deadlock.

use smallvec::SmallVec;
use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::domain::{
    inventory::{
        errors::InventoryServiceError, policy::StockPolicy, records::StockAdjustment,
        repository::PgInventoryRepository,
    },
    products::records::ProductUuid,
};

#[derive(Debug, Clone)]
pub(crate) struct StockUpdater {
    repository: PgInventoryRepository,
    policy: StockPolicy,
}

impl StockUpdater {
    #[must_use]
    pub(crate) fn new(policy: StockPolicy) -> Self {
        Self {
            repository: PgInventoryRepository::new(),
            policy,
        }
    }

    /// Decrement stock for every sold line whose product is not a service.
    ///
    /// Any shortfall aborts with [`InventoryServiceError::InsufficientStock`]; the caller
    /// is expected to roll the transaction back.
    #[tracing::instrument(
        name = "inventory.updater.apply_sale",
        skip(self, tx, sold),
        fields(lines = sold.len()),
        err
    )]
    pub(crate) async fn apply_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sold: &[(ProductUuid, u64)],
    ) -> Result<Vec<StockAdjustment>, InventoryServiceError> {
        let mut adjustments = Vec::with_capacity(sold.len());

        for (product_uuid, quantity) in merge_sold_quantities(sold) {
            let product = self.repository.lock_product(tx, product_uuid).await?;

            if self.policy.is_exempt(&product.category) {
                debug!(%product_uuid, "skipping stock decrement for service item");
                continue;
            }

            let remaining = self
                .repository
                .decrement_stock(tx, product_uuid, quantity)
                .await?
                .ok_or(InventoryServiceError::InsufficientStock {
                    product_uuid,
                    requested: quantity,
                    available: product.stock_quantity,
                })?;

            adjustments.push(StockAdjustment {
                product_uuid,
                sold: quantity,
                remaining,
            });
        }

        Ok(adjustments)
    }
}

/// Collapse repeated products and order by UUID for deterministic locking.
fn merge_sold_quantities(sold: &[(ProductUuid, u64)]) -> SmallVec<[(ProductUuid, u64); 8]> {
    let mut merged: SmallVec<[(ProductUuid, u64); 8]> = SmallVec::new();

    for &(product, quantity) in sold {
        match merged.iter_mut().find(|(uuid, _)| *uuid == product) {
            Some((_, total)) => *total = total.saturating_add(quantity),
            None => merged.push((product, quantity)),
        }
    }

    merged.retain(|(_, quantity)| *quantity > 0);
    merged.sort_unstable_by_key(|(uuid, _)| *uuid);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_combines_duplicates_and_sorts() {
        let a = ProductUuid::new();
        let b = ProductUuid::new();

        let merged = merge_sold_quantities(&[(b, 1), (a, 2), (b, 3)]);

        let mut expected = vec![(a, 2), (b, 4)];
        expected.sort_unstable_by_key(|(uuid, _)| *uuid);

        assert_eq!(merged.as_slice(), expected.as_slice());
    }

    #[test]
    fn merge_drops_zero_quantities() {
        let merged = merge_sold_quantities(&[(ProductUuid::new(), 0)]);

        assert!(merged.is_empty());
    }
}
