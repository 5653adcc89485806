//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::into_status_error, extensions::*, state::State};

/// Clear Cart Handler
///
/// Discards every line and the saved snapshot.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .clear_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vetshop_app::domain::carts::{MockCartsService, cart::CartUuid};

    use crate::test_helpers::carts_service;

    use super::*;

    #[tokio::test]
    async fn test_clear_cart_success() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/carts/{uuid}"))
            .send(&carts_service(
                carts,
                Router::with_path("carts/{cart}").delete(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
