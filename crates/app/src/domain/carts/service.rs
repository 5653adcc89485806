//! Carts service.
//!
//! Each operation loads the cart snapshot, applies one mutation, and writes the
//! snapshot back before returning, all inside one transaction.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            cart::{Cart, CartUuid},
            errors::CartsServiceError,
            repository::PgCartSnapshotsRepository,
        },
        inventory::policy::StockPolicy,
        products::{PgProductsRepository, records::ProductUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    snapshots: PgCartSnapshotsRepository,
    products: PgProductsRepository,
    stock: StockPolicy,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db, stock: StockPolicy) -> Self {
        Self {
            db,
            snapshots: PgCartSnapshotsRepository::new(),
            products: PgProductsRepository::new(),
            stock,
        }
    }

    async fn mutate<F>(&self, cart: CartUuid, apply: F) -> Result<Cart, CartsServiceError>
    where
        F: FnOnce(&mut Cart) + Send,
    {
        let mut tx = self.db.begin().await?;

        let mut current = self.snapshots.load_cart(&mut tx, cart).await?;

        apply(&mut current);

        let saved = self.snapshots.save_cart(&mut tx, &current).await?;

        tx.commit().await?;

        Ok(saved)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.snapshots.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self),
        fields(cart_uuid = %cart, product_uuid = %product),
        err
    )]
    async fn add_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.products.get_product(&mut tx, product).await?;
        let mut current = self.snapshots.load_cart(&mut tx, cart).await?;

        current.add_item(&product, &self.stock);

        let saved = self.snapshots.save_cart(&mut tx, &current).await?;

        tx.commit().await?;

        Ok(saved)
    }

    #[tracing::instrument(
        name = "carts.service.update_quantity",
        skip(self),
        fields(cart_uuid = %cart, product_uuid = %product),
        err
    )]
    async fn update_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Cart, CartsServiceError> {
        self.mutate(cart, |current| current.update_quantity(product, quantity))
            .await
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self),
        fields(cart_uuid = %cart, product_uuid = %product),
        err
    )]
    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        self.mutate(cart, |current| current.remove_item(product))
            .await
    }

    #[tracing::instrument(
        name = "carts.service.clear_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn clear_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.snapshots.delete_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Restore a cart from its snapshot; an unknown cart is empty.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Add one unit of a product, clamped to its stock unless the product is a service.
    async fn add_item(&self, cart: CartUuid, product: ProductUuid)
    -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity, clamped to stock; zero removes the line.
    async fn update_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line from the cart.
    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Discard the cart and its snapshot.
    async fn clear_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsService,
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    async fn unknown_cart_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = ctx.carts.get_cart(CartUuid::new()).await?;

        assert!(cart.is_empty());
        assert!(cart.updated_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn added_items_survive_reload() -> TestResult {
        let ctx = TestContext::new().await;
        let cart = CartUuid::new();
        let product = ctx
            .products
            .create_product(new_product("Cat litter", "hygiene", 8_00, 2))
            .await?;

        ctx.carts.add_item(cart, product.uuid).await?;
        ctx.carts.add_item(cart, product.uuid).await?;
        ctx.carts.add_item(cart, product.uuid).await?;

        let restored = ctx.carts.get_cart(cart).await?;

        assert_eq!(restored.item_count(), 2, "quantity is clamped to stock");
        assert_eq!(restored.total(), 16_00);
        assert!(restored.updated_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_product_returns_product_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.carts.add_item(CartUuid::new(), ProductUuid::new()).await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_to_zero_then_clear_empties_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let cart = CartUuid::new();
        let product = ctx
            .products
            .create_product(new_product("Vitamins", "medication", 4_00, 10))
            .await?;

        ctx.carts.add_item(cart, product.uuid).await?;

        let updated = ctx.carts.update_quantity(cart, product.uuid, 6).await?;

        assert_eq!(updated.item_count(), 6);

        let emptied = ctx.carts.update_quantity(cart, product.uuid, 0).await?;

        assert!(emptied.is_empty());

        ctx.carts.add_item(cart, product.uuid).await?;
        ctx.carts.clear_cart(cart).await?;

        assert!(ctx.carts.get_cart(cart).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn service_without_stock_can_be_added_repeatedly() -> TestResult {
        let ctx = TestContext::new().await;
        let cart = CartUuid::new();
        let grooming = ctx
            .products
            .create_product(new_product("Grooming", "service", 30_00, 0))
            .await?;

        ctx.carts.add_item(cart, grooming.uuid).await?;
        ctx.carts.add_item(cart, grooming.uuid).await?;

        let restored = ctx.carts.get_cart(cart).await?;

        assert_eq!(restored.item_count(), 2, "services are not capped by stock");
        assert_eq!(restored.total(), 60_00);

        Ok(())
    }
}
