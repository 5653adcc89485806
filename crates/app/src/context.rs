//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutPolicy, CheckoutService, PgCheckoutService},
        clients::{ClientsService, PgClientsService},
        inventory::{InventoryService, PgInventoryService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub clients: Arc<dyn ClientsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub orders: Arc<dyn OrdersService>,
    pub inventory: Arc<dyn InventoryService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or when
    /// `migrate_on_startup` is set and a migration fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        policy: CheckoutPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        if settings.migrate_on_startup {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(Db::new(pool), policy))
    }

    #[must_use]
    pub fn from_db(db: Db, policy: CheckoutPolicy) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            clients: Arc::new(PgClientsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone(), policy.stock.clone())),
            inventory: Arc::new(PgInventoryService::new(db.clone(), policy.stock.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db, policy)),
        }
    }
}
