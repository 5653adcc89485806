//! Checkout service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::cart::CartUuid,
        checkout::{
            composer::{compose_order, require_cart_and_client},
            errors::CheckoutError,
            policy::CheckoutPolicy,
            request::CheckoutRequest,
            store::{CheckoutStore, PgCheckoutStore},
        },
        orders::records::OrderRecord,
    },
};

#[derive(Clone)]
pub struct PgCheckoutService {
    store: Arc<dyn CheckoutStore>,
    policy: CheckoutPolicy,
}

impl Debug for PgCheckoutService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgCheckoutService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, policy: CheckoutPolicy) -> Self {
        let store = PgCheckoutStore::new(db, policy.stock.clone());

        Self::with_store(Arc::new(store), policy)
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn CheckoutStore>, policy: CheckoutPolicy) -> Self {
        Self { store, policy }
    }

    async fn validate_and_commit(
        &self,
        cart: CartUuid,
        request: CheckoutRequest,
    ) -> Result<OrderRecord, CheckoutError> {
        let current = self.store.load_cart(cart).await?;

        let client = require_cart_and_client(&current, &request)?;

        if !self.store.client_exists(client).await? {
            return Err(CheckoutError::ClientNotFound);
        }

        let composed = compose_order(&current, request, client, &self.policy, Timestamp::now())?;

        self.store
            .commit_order(cart, composed.order, composed.receipt)
            .await
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    #[tracing::instrument(
        name = "checkout.service.checkout",
        skip(self, request),
        fields(cart_uuid = %cart, channel = %request.channel),
        err
    )]
    async fn checkout(
        &self,
        cart: CartUuid,
        request: CheckoutRequest,
    ) -> Result<OrderRecord, CheckoutError> {
        match self.validate_and_commit(cart, request).await {
            Ok(order) => {
                info!(
                    order_number = %order.order_number,
                    subtotal = order.subtotal,
                    tax_amount = order.tax_amount,
                    total_amount = order.total_amount,
                    "checkout completed"
                );

                Ok(order)
            }
            Err(error) => {
                if error.is_validation() {
                    warn!(%error, "checkout rejected");
                }

                Err(error)
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn the cart into an order, taking stock and clearing the cart.
    async fn checkout(
        &self,
        cart: CartUuid,
        request: CheckoutRequest,
    ) -> Result<OrderRecord, CheckoutError>;
}
