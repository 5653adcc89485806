//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::{
        clients::records::ClientUuid,
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
            status::OrderStatus,
        },
    },
};

const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const LIST_CLIENT_ORDERS_SQL: &str = include_str!("../sql/list_client_orders.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const LOCK_ORDER_STATUS_SQL: &str = include_str!("../sql/lock_order_status.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");
const DELETE_ORDER_SQL: &str = include_str!("../sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(status.map(OrderStatus::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_client_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_CLIENT_ORDERS_SQL)
            .bind(client.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert the order header. Lines are written separately.
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(&order.order_number)
            .bind(order.channel.as_str())
            .bind(order.client_uuid.into_uuid())
            .bind(order.delivery_address.as_deref())
            .bind(to_db_amount(order.subtotal, "subtotal")?)
            .bind(to_db_amount(order.tax_amount, "tax_amount")?)
            .bind(to_db_amount(order.total_amount, "total_amount")?)
            .bind(order.status.as_str())
            .bind(&order.payment_method)
            .bind(order.notes.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read the current status and hold the row lock until the transaction ends.
    pub(crate) async fn lock_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderStatus, sqlx::Error> {
        let status: String = query_scalar(LOCK_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        decode_status(&status)
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn decode_status(value: &str) -> Result<OrderStatus, sqlx::Error> {
    value.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "status".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let channel: String = row.try_get("channel")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            channel: channel.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "channel".to_string(),
                source: Box::new(e),
            })?,
            client_uuid: ClientUuid::from_uuid(row.try_get("client_uuid")?),
            delivery_address: row.try_get("delivery_address")?,
            subtotal: try_get_amount(row, "subtotal")?,
            tax_amount: try_get_amount(row, "tax_amount")?,
            total_amount: try_get_amount(row, "total_amount")?,
            status: decode_status(&status)?,
            payment_method: row.try_get("payment_method")?,
            notes: row.try_get("notes")?,
            receipt_key: row.try_get("receipt_key")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
