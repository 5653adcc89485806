//! Payment Receipts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::{
    data::NewPaymentReceipt,
    records::{OrderUuid, PaymentReceiptRecord, receipt_key},
};

const CREATE_PAYMENT_RECEIPT_SQL: &str = include_str!("../sql/create_payment_receipt.sql");
const GET_PAYMENT_RECEIPT_SQL: &str = include_str!("../sql/get_payment_receipt.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReceiptsRepository;

impl PgReceiptsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_receipt(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        receipt: NewPaymentReceipt,
    ) -> Result<PaymentReceiptRecord, sqlx::Error> {
        query_as::<Postgres, PaymentReceiptRecord>(CREATE_PAYMENT_RECEIPT_SQL)
            .bind(order.into_uuid())
            .bind(receipt_key(order))
            .bind(receipt.content_type)
            .bind(receipt.data)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_receipt(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<PaymentReceiptRecord, sqlx::Error> {
        query_as::<Postgres, PaymentReceiptRecord>(GET_PAYMENT_RECEIPT_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentReceiptRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            key: row.try_get("key")?,
            content_type: row.try_get("content_type")?,
            data: row.try_get("data")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
