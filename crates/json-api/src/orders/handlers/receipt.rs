//! Download Receipt Handler

use std::sync::Arc;

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    oapi::extract::PathParam,
    prelude::*,
};
use uuid::Uuid;

use crate::{extensions::*, orders::into_status_error, state::State};

/// Download Receipt Handler
///
/// Streams back the payment receipt uploaded at checkout with its original content type.
#[endpoint(
    tags("orders"),
    summary = "Download Payment Receipt",
    responses(
        (status_code = StatusCode::OK, description = "Receipt bytes"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or receipt not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let receipt = state
        .app
        .orders
        .get_receipt(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(CONTENT_TYPE, receipt.content_type.as_str(), true)
        .or_500("failed to set receipt content type")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", receipt.key),
            true,
        )
        .or_500("failed to set receipt disposition")?
        .write_body(receipt.data)
        .or_500("failed to write receipt body")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vetshop_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        records::{OrderUuid, PaymentReceiptRecord, receipt_key},
    };

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{order}/receipt").get(handler))
    }

    #[tokio::test]
    async fn test_receipt_is_returned_with_content_type() -> TestResult {
        let uuid = OrderUuid::new();
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_receipt()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| {
                Ok(PaymentReceiptRecord {
                    order_uuid: uuid,
                    key: receipt_key(uuid),
                    content_type: "image/png".to_string(),
                    data: vec![0x89, b'P', b'N', b'G'],
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::get(format!("http://example.com/orders/{uuid}/receipt"))
            .send(&make_service(orders))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(content_type.as_deref(), Some("image/png"));
        assert_eq!(res.take_bytes(None).await?.as_ref(), &[0x89, b'P', b'N', b'G']);

        Ok(())
    }

    #[tokio::test]
    async fn test_order_without_receipt_returns_404() -> TestResult {
        let uuid = OrderUuid::new();
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_receipt()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/orders/{uuid}/receipt"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
