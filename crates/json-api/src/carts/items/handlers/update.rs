//! Update Cart Item Handler

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

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// Zero removes the line; values above stock are capped
    pub quantity: u64,
}

/// Update Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .update_quantity(
            cart.into_inner().into(),
            product.into_inner().into(),
            json.into_inner().quantity,
        )
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
        carts::{MockCartsService, cart::CartUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart}/items/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_quantity_passes_requested_value() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |c, p, q| *c == cart && *p == product && *q == 4)
            .return_once(move |_, _, _| Ok(make_cart(cart, &[(2_50, 4)])));

        let mut res =
            TestClient::put(format!("http://example.com/carts/{cart}/items/{product}"))
                .json(&json!({ "quantity": 4 }))
                .send(&make_service(carts))
                .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total, 10_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_returns_cart_without_line() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, _, q| *q == 0)
            .return_once(move |_, _, _| Ok(make_cart(cart, &[])));

        let mut res =
            TestClient::put(format!("http://example.com/carts/{cart}/items/{product}"))
                .json(&json!({ "quantity": 0 }))
                .send(&make_service(carts))
                .await;

        let body: CartResponse = res.take_json().await?;

        assert!(body.lines.is_empty(), "line should be removed");

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_quantity_is_rejected() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let res = TestClient::put(format!("http://example.com/carts/{cart}/items/{product}"))
            .json(&json!({ "quantity": -1 }))
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
