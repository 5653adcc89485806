//! Order Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::{
        orders::{
            data::NewOrderLine,
            records::{OrderLineRecord, OrderLineUuid, OrderUuid},
        },
        products::records::ProductUuid,
    },
};

const CREATE_ORDER_LINES_SQL: &str = include_str!("../sql/create_order_lines.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("../sql/get_order_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert all lines of an order in one statement, preserving their order.
    #[tracing::instrument(
        name = "orders.repository.create_order_lines",
        skip(self, tx, lines),
        fields(order_uuid = %order, line_count = lines.len()),
        err
    )]
    pub(crate) async fn create_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        lines: &[NewOrderLine],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = lines.iter().map(|l| l.uuid.into_uuid()).collect();
        let products: Vec<Uuid> = lines.iter().map(|l| l.product_uuid.into_uuid()).collect();
        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();

        let quantities = lines
            .iter()
            .map(|l| to_db_amount(l.quantity, "quantity"))
            .collect::<Result<Vec<i64>, _>>()?;

        let unit_prices = lines
            .iter()
            .map(|l| to_db_amount(l.unit_price, "unit_price"))
            .collect::<Result<Vec<i64>, _>>()?;

        let total_prices = lines
            .iter()
            .map(|l| to_db_amount(l.total_price, "total_price"))
            .collect::<Result<Vec<i64>, _>>()?;

        query_as::<Postgres, OrderLineRecord>(CREATE_ORDER_LINES_SQL)
            .bind(order.into_uuid())
            .bind(&uuids)
            .bind(&products)
            .bind(&names)
            .bind(&quantities)
            .bind(&unit_prices)
            .bind(&total_prices)
            .fetch_all(&mut **tx)
            .await
    }

    /// Lines for several orders at once, grouped by order then position.
    pub(crate) async fn get_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = orders.iter().copied().map(OrderUuid::into_uuid).collect();

        query_as::<Postgres, OrderLineRecord>(GET_ORDER_LINES_SQL)
            .bind(&uuids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            quantity: try_get_amount(row, "quantity")?,
            unit_price: try_get_amount(row, "unit_price")?,
            total_price: try_get_amount(row, "total_price")?,
        })
    }
}
