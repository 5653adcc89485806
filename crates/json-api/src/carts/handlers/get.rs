//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetshop_app::domain::carts::cart::{Cart, CartLine};

use crate::{carts::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// Lines in the order products were first added
    pub lines: Vec<CartLineResponse>,

    /// Total units across all lines
    pub item_count: u64,

    /// Sum of line totals in minor units, before tax
    pub total: u64,

    /// When the cart was last saved; absent for a cart never saved
    pub updated_at: Option<String>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: cart.uuid.into(),
            item_count: cart.item_count(),
            total: cart.total(),
            updated_at: cart.updated_at.as_ref().map(ToString::to_string),
            lines: cart.into_lines().into_iter().map(Into::into).collect(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    pub product_uuid: Uuid,
    pub name: String,
    pub category: String,

    /// Price captured when the product was added, in minor units
    pub unit_price: u64,
    pub quantity: u64,

    /// Stock known when the line was last touched; caps `quantity` unless exempt
    pub stock_available: u64,

    /// Services are not limited by stock
    pub stock_exempt: bool,
    pub line_total: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            line_total: line.line_total(),
            product_uuid: line.product_uuid.into(),
            name: line.name,
            category: line.category,
            unit_price: line.unit_price,
            quantity: line.quantity,
            stock_available: line.stock_available,
            stock_exempt: line.stock_exempt,
        }
    }
}

/// Get Cart Handler
///
/// Returns the cart; a cart that was never saved is empty.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vetshop_app::domain::{
        carts::{CartsServiceError, MockCartsService, cart::CartUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_cart_returns_lines_and_totals() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_cart(uuid, &[(10_00, 2), (5_50, 1)])));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.item_count, 3);
        assert_eq!(body.total, 25_50);
        assert_eq!(
            body.lines.iter().map(|l| l.line_total).collect::<Vec<_>>(),
            vec![20_00, 5_50]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_cart_is_empty() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(make_cart(uuid, &[])));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.lines.is_empty(), "new cart has no lines");
        assert_eq!(body.updated_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_returns_500() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().return_once(|_| {
            Err(CartsServiceError::CorruptSnapshot(sqlx::Error::Decode(
                "lines is not an array".into(),
            )))
        });

        let res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_service_line_is_marked_stock_exempt() -> TestResult {
        let uuid = CartUuid::new();
        let consult = CartLine {
            product_uuid: ProductUuid::new(),
            name: "Consultation".to_string(),
            category: "service".to_string(),
            unit_price: 35_00,
            quantity: 3,
            stock_available: 0,
            stock_exempt: true,
        };

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(Cart::restore(uuid, vec![consult], None)));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;
        let line = body.lines.first();

        assert_eq!(line.map(|l| l.stock_exempt), Some(true));
        assert_eq!(line.map(|l| l.quantity), Some(3));
        assert_eq!(body.total, 105_00);

        Ok(())
    }
}
