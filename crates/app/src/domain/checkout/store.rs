//! Checkout Store
//!
//! Storage side of checkout. [`CheckoutStore::commit_order`] writes the order, its
//! lines and receipt, takes stock and drops the cart snapshot in one transaction; a
//! failure at any step leaves the database untouched.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            PgCartSnapshotsRepository,
            cart::{Cart, CartUuid},
        },
        checkout::errors::CheckoutError,
        clients::{PgClientsRepository, records::ClientUuid},
        inventory::{StockUpdater, policy::StockPolicy},
        orders::{
            PgOrderLinesRepository, PgOrdersRepository, PgReceiptsRepository,
            data::{NewOrder, NewPaymentReceipt},
            records::OrderRecord,
        },
    },
};

#[automock]
#[async_trait]
pub trait CheckoutStore: Send + Sync {
    /// Restore the cart being checked out.
    async fn load_cart(&self, cart: CartUuid) -> Result<Cart, CheckoutError>;

    /// Whether the payer exists.
    async fn client_exists(&self, client: ClientUuid) -> Result<bool, CheckoutError>;

    /// Persist the order and apply its side effects atomically.
    async fn commit_order(
        &self,
        cart: CartUuid,
        order: NewOrder,
        receipt: Option<NewPaymentReceipt>,
    ) -> Result<OrderRecord, CheckoutError>;
}

#[derive(Debug, Clone)]
pub struct PgCheckoutStore {
    db: Db,
    carts: PgCartSnapshotsRepository,
    clients: PgClientsRepository,
    orders: PgOrdersRepository,
    lines: PgOrderLinesRepository,
    receipts: PgReceiptsRepository,
    stock: StockUpdater,
}

impl PgCheckoutStore {
    #[must_use]
    pub fn new(db: Db, stock_policy: StockPolicy) -> Self {
        Self {
            db,
            carts: PgCartSnapshotsRepository::new(),
            clients: PgClientsRepository::new(),
            orders: PgOrdersRepository::new(),
            lines: PgOrderLinesRepository::new(),
            receipts: PgReceiptsRepository::new(),
            stock: StockUpdater::new(stock_policy),
        }
    }
}

#[async_trait]
impl CheckoutStore for PgCheckoutStore {
    async fn load_cart(&self, cart: CartUuid) -> Result<Cart, CheckoutError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn client_exists(&self, client: ClientUuid) -> Result<bool, CheckoutError> {
        let mut tx = self.db.begin().await?;

        let found = self.clients.find_client(&mut tx, client).await?;

        tx.commit().await?;

        Ok(found.is_some())
    }

    #[tracing::instrument(
        name = "checkout.store.commit_order",
        skip(self, order, receipt),
        fields(cart_uuid = %cart, order_uuid = %order.uuid, line_count = order.lines.len()),
        err
    )]
    async fn commit_order(
        &self,
        cart: CartUuid,
        order: NewOrder,
        receipt: Option<NewPaymentReceipt>,
    ) -> Result<OrderRecord, CheckoutError> {
        let sold: Vec<_> = order
            .lines
            .iter()
            .map(|line| (line.product_uuid, line.quantity))
            .collect();

        let mut tx = self.db.begin().await?;

        // Stock first: a contended last unit must fail as InsufficientStock.
        let adjustments = self.stock.apply_sale(&mut tx, &sold).await?;

        let mut record = self.orders.create_order(&mut tx, &order).await?;

        record.lines = self
            .lines
            .create_order_lines(&mut tx, order.uuid, &order.lines)
            .await?;

        if let Some(receipt) = receipt {
            let stored = self.receipts.create_receipt(&mut tx, order.uuid, receipt).await?;

            record.receipt_key = Some(stored.key);
        }

        self.carts.delete_cart(&mut tx, cart).await?;

        tx.commit().await?;

        debug!(adjusted_products = adjustments.len(), "order committed");

        Ok(record)
    }
}
