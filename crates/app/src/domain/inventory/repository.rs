//! Inventory Repository

use sqlx::{Postgres, Transaction, query_as, query_scalar};

use crate::{
    database::to_db_amount,
    domain::products::records::{ProductRecord, ProductUuid},
};

const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");
const SET_STOCK_SQL: &str = include_str!("sql/set_stock.sql");
const RESTOCK_SQL: &str = include_str!("sql/restock.sql");
const LIST_LOW_STOCK_SQL: &str = include_str!("sql/list_low_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch a product and hold its row lock until the transaction ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Subtract `quantity` only if enough stock remains; `None` means nothing changed.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Option<u64>, sqlx::Error> {
        let remaining: Option<i64> = query_scalar(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(to_db_amount(quantity, "stock_quantity")?)
            .fetch_optional(&mut **tx)
            .await?;

        remaining
            .map(|remaining| {
                u64::try_from(remaining).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "stock_quantity".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()
    }

    pub(crate) async fn set_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(to_db_amount(quantity, "stock_quantity")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn restock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(RESTOCK_SQL)
            .bind(product.into_uuid())
            .bind(to_db_amount(quantity, "stock_quantity")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_low_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        service_category: &str,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_LOW_STOCK_SQL)
            .bind(service_category)
            .fetch_all(&mut **tx)
            .await
    }
}
