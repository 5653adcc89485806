//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        clients::records::ClientUuid,
        orders::{
            errors::OrdersServiceError,
            records::{OrderLineRecord, OrderRecord, OrderUuid, PaymentReceiptRecord},
            repositories::{PgOrderLinesRepository, PgOrdersRepository, PgReceiptsRepository},
            status::{OrderStatus, RequestedStatus},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
    receipts_repository: PgReceiptsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
            receipts_repository: PgReceiptsRepository::new(),
        }
    }

    async fn with_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut orders: Vec<OrderRecord>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let lines = self.lines_repository.get_order_lines(tx, &uuids).await?;

        attach_lines(&mut orders, lines);

        Ok(orders)
    }
}

/// Distribute fetched lines onto their orders, keeping each order's line order.
fn attach_lines(orders: &mut [OrderRecord], lines: Vec<OrderLineRecord>) {
    let mut by_order: FxHashMap<OrderUuid, Vec<OrderLineRecord>> = FxHashMap::default();

    for line in lines {
        by_order.entry(line.order_uuid).or_default().push(line);
    }

    for order in orders {
        if let Some(lines) = by_order.remove(&order.uuid) {
            order.lines = lines;
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.orders_repository.get_order(&mut tx, order).await?;

        record.lines = self.lines_repository.get_order_lines(&mut tx, &[order]).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx, status).await?;
        let orders = self.with_lines(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_client_orders(
        &self,
        client: ClientUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_client_orders(&mut tx, client)
            .await?;
        let orders = self.with_lines(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self),
        fields(order_uuid = %order),
        err
    )]
    async fn update_status(
        &self,
        order: OrderUuid,
        requested: RequestedStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self
            .orders_repository
            .lock_order_status(&mut tx, order)
            .await?;

        let next = current.transition(requested)?;

        let mut updated = self
            .orders_repository
            .update_order_status(&mut tx, order, next)
            .await?;

        updated.lines = self.lines_repository.get_order_lines(&mut tx, &[order]).await?;

        tx.commit().await?;

        info!(order_number = %updated.order_number, from = %current, to = %next, "order status changed");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_uuid = %order),
        err
    )]
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.orders_repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_receipt(
        &self,
        order: OrderUuid,
    ) -> Result<PaymentReceiptRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let receipt = self.receipts_repository.get_receipt(&mut tx, order).await?;

        tx.commit().await?;

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve an order with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// All orders, newest first, optionally restricted to one status.
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// A client's orders, newest first.
    async fn list_client_orders(
        &self,
        client: ClientUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Move an order along the fulfilment state machine.
    async fn update_status(
        &self,
        order: OrderUuid,
        requested: RequestedStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Remove an order together with its lines and receipt.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;

    /// The payment receipt uploaded at checkout.
    async fn get_receipt(
        &self,
        order: OrderUuid,
    ) -> Result<PaymentReceiptRecord, OrdersServiceError>;
}
