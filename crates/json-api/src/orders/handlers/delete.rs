//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{extensions::*, orders::into_status_error, state::State};

/// Delete Order Handler
///
/// Removes the order with its lines and receipt. Stock is not returned.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    responses(
        (status_code = StatusCode::OK, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = order.into_inner();

    state
        .app
        .orders
        .delete_order(order.into())
        .await
        .map_err(into_status_error)?;

    info!(order_uuid = %order, request_id = depot.request_id(), "order deleted");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vetshop_app::domain::orders::{MockOrdersService, OrdersServiceError, records::OrderUuid};

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{order}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_order_success() -> TestResult {
        let uuid = OrderUuid::new();
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_order_returns_404() -> TestResult {
        let uuid = OrderUuid::new();
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
