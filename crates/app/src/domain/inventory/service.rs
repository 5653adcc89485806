//! Inventory service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        inventory::{
            errors::InventoryServiceError, policy::StockPolicy, repository::PgInventoryRepository,
        },
        products::records::{ProductRecord, ProductUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
    policy: StockPolicy,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db, policy: StockPolicy) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
            policy,
        }
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    #[tracing::instrument(
        name = "inventory.service.set_stock",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn set_stock(
        &self,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.set_stock(&mut tx, product, quantity).await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "inventory.service.restock",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn restock(
        &self,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.restock(&mut tx, product, quantity).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn low_stock(&self) -> Result<Vec<ProductRecord>, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_low_stock(&mut tx, self.policy.service_category())
            .await?;

        tx.commit().await?;

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Overwrite a product's stock (stock take or manual correction).
    async fn set_stock(
        &self,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, InventoryServiceError>;

    /// Add received units to a product's stock.
    async fn restock(
        &self,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, InventoryServiceError>;

    /// Products at or below their reorder threshold, services excluded, lowest first.
    async fn low_stock(&self) -> Result<Vec<ProductRecord>, InventoryServiceError>;
}
