//! Cart Snapshots Repository
//!
//! Persists the full line list of a cart as one JSON document so a session can be
//! restored after a reload.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::carts::cart::{Cart, CartLine, CartUuid};

const GET_CART_SNAPSHOT_SQL: &str = include_str!("sql/get_cart_snapshot.sql");
const SAVE_CART_SNAPSHOT_SQL: &str = include_str!("sql/save_cart_snapshot.sql");
const DELETE_CART_SNAPSHOT_SQL: &str = include_str!("sql/delete_cart_snapshot.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartSnapshotsRepository;

impl PgCartSnapshotsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load a cart, or an empty one when no snapshot exists yet.
    pub(crate) async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Cart, sqlx::Error> {
        let snapshot = query_as::<Postgres, Cart>(GET_CART_SNAPSHOT_SQL)
            .bind(cart.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(snapshot.unwrap_or_else(|| Cart::new(cart)))
    }

    pub(crate) async fn save_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &Cart,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(SAVE_CART_SNAPSHOT_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(Json(cart.lines()))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SNAPSHOT_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(lines) = row.try_get::<Json<Vec<CartLine>>, _>("lines")?;

        Ok(Cart::restore(
            CartUuid::from_uuid(row.try_get("uuid")?),
            lines,
            Some(row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff()),
        ))
    }
}
