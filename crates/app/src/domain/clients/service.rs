//! Clients service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::clients::{
        data::NewClient,
        errors::ClientsServiceError,
        records::{ClientRecord, ClientUuid},
        repository::PgClientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    repository: PgClientsRepository,
}

impl PgClientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgClientsRepository::new(),
        }
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let clients = self.repository.list_clients(&mut tx).await?;

        tx.commit().await?;

        Ok(clients)
    }

    async fn get_client(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let client = self.repository.find_client(&mut tx, client).await?;

        tx.commit().await?;

        client.ok_or(ClientsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "clients.service.create_client",
        skip(self, client),
        fields(client_uuid = %client.uuid),
        err
    )]
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError> {
        if client.first_name.trim().is_empty() || client.last_name.trim().is_empty() {
            return Err(ClientsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_client(&mut tx, client).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
/// Client (pet owner) persistence operations.
pub trait ClientsService: Send + Sync {
    /// Lists clients ordered by name.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError>;

    /// Retrieve a single client.
    async fn get_client(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError>;

    /// Creates a new client.
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_client};

    use super::*;

    #[tokio::test]
    async fn create_client_then_get_returns_it() -> TestResult {
        let ctx = TestContext::new().await;
        let new = new_client("Ana", "Quispe");

        ctx.clients.create_client(new.clone()).await?;

        let client = ctx.clients.get_client(new.uuid).await?;

        assert_eq!(client.uuid, new.uuid);
        assert_eq!(client.full_name(), "Ana Quispe");

        Ok(())
    }

    #[tokio::test]
    async fn get_client_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.get_client(ClientUuid::new()).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_client_with_blank_name_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.create_client(new_client(" ", "Quispe")).await;

        assert!(
            matches!(result, Err(ClientsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }
}
