//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{get::CartResponse, into_status_error},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,
}

/// Add Cart Item Handler
///
/// Adds one unit of the product, or one more unit when it is already in the cart.
/// The quantity never exceeds the product's stock.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .add_item(cart.into_inner().into(), json.into_inner().product_uuid.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vetshop_app::domain::{
        carts::{CartsServiceError, MockCartsService, cart::CartUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_returns_updated_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |c, p| *c == cart && *p == product)
            .return_once(move |_, _| Ok(make_cart(cart, &[(10_00, 1)])));

        let mut res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "product_uuid": product.into_uuid() }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.item_count, 1);
        assert_eq!(body.total, 10_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let cart = CartUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
