//! Clients Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::clients::{
    data::NewClient,
    records::{ClientRecord, ClientUuid},
};

const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");
const CREATE_CLIENT_SQL: &str = include_str!("sql/create_client.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(client.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: NewClient,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(CREATE_CLIENT_SQL)
            .bind(client.uuid.into_uuid())
            .bind(client.first_name)
            .bind(client.last_name)
            .bind(client.email)
            .bind(client.phone)
            .bind(client.address)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ClientUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            address: row.try_get("address")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
