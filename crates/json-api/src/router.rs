//! App Router

use salvo::Router;

use crate::{carts, clients, inventory, orders, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("stock").put(inventory::set_stock::handler))
                        .push(Router::with_path("restock").post(inventory::restock::handler)),
                ),
        )
        .push(Router::with_path("inventory/low-stock").get(inventory::low_stock::handler))
        .push(
            Router::with_path("clients")
                .get(clients::index::handler)
                .post(clients::create::handler)
                .push(
                    Router::with_path("{client}")
                        .get(clients::get::handler)
                        .push(Router::with_path("orders").get(clients::orders::handler)),
                ),
        )
        .push(
            Router::with_path("carts/{cart}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                )
                .push(Router::with_path("checkout").post(carts::checkout::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .delete(orders::delete::handler)
                        .push(Router::with_path("status").put(orders::status::handler))
                        .push(Router::with_path("receipt").get(orders::receipt::handler)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use vetshop_app::domain::{
        carts::{MockCartsService, cart::CartUuid},
        orders::{MockOrdersService, records::OrderUuid, status::OrderStatus},
    };

    use crate::{
        carts::get::CartResponse,
        orders::get::OrderResponse,
        test_helpers::{TestApp, make_cart, make_order},
    };

    use super::*;

    #[tokio::test]
    async fn test_nested_routes_reach_their_handlers() -> TestResult {
        let cart = CartUuid::new();
        let order = OrderUuid::new();

        let mut carts = MockCartsService::new();
        let mut orders = MockOrdersService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(make_cart(cart, &[(1_00, 1)])));

        orders
            .expect_get_order()
            .once()
            .withf(move |u| *u == order)
            .return_once(move |_| Ok(make_order(order, OrderStatus::Pending)));

        let service = TestApp::new().carts(carts).orders(orders).service(app_router());

        let mut res = TestClient::get(format!("http://example.com/carts/{cart}"))
            .send(&service)
            .await;

        let cart_body: CartResponse = res.take_json().await?;

        assert_eq!(cart_body.item_count, 1);

        let mut res = TestClient::get(format!("http://example.com/orders/{order}"))
            .send(&service)
            .await;

        let order_body: OrderResponse = res.take_json().await?;

        assert_eq!(order_body.uuid, order.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() -> TestResult {
        let res = TestClient::get("http://example.com/appointments")
            .send(&TestApp::new().service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
