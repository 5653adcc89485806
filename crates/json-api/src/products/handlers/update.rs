//! Update Product Handler

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

use vetshop_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{get::ProductResponse, into_status_error},
    state::State,
};

/// Update Product Request
///
/// Stock is not part of the update; use the stock and restock endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub low_stock_threshold: u64,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            category: request.category,
            price: request.price,
            low_stock_threshold: request.low_stock_threshold,
        }
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .update_product(product.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vetshop_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let mut updated = make_product(uuid);

        updated.price = 11_50;

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| *u == uuid && update.price == 11_50)
            .return_once(move |_, _| Ok(updated));

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({
                "name": "Kibble 3kg",
                "category": "food",
                "price": 1150,
                "low_stock_threshold": 3,
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.price, 11_50);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({
                "name": "Kibble 3kg",
                "category": "food",
                "price": 1150,
                "low_stock_threshold": 3,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
