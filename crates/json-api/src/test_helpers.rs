//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use vetshop_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            cart::{Cart, CartLine, CartUuid},
        },
        checkout::MockCheckoutService,
        clients::{
            MockClientsService,
            records::{ClientRecord, ClientUuid},
        },
        inventory::MockInventoryService,
        orders::{
            MockOrdersService,
            channel::SalesChannel,
            records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
            status::OrderStatus,
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::{DEFAULT_MAX_RECEIPT_BYTES, State};

/// Mocked services behind a test router. Services not handed in reject every call.
#[derive(Default)]
pub(crate) struct TestApp {
    products: Option<MockProductsService>,
    clients: Option<MockClientsService>,
    carts: Option<MockCartsService>,
    checkout: Option<MockCheckoutService>,
    orders: Option<MockOrdersService>,
    inventory: Option<MockInventoryService>,
    max_receipt_bytes: Option<usize>,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn products(mut self, products: MockProductsService) -> Self {
        self.products = Some(products);
        self
    }

    pub(crate) fn clients(mut self, clients: MockClientsService) -> Self {
        self.clients = Some(clients);
        self
    }

    pub(crate) fn carts(mut self, carts: MockCartsService) -> Self {
        self.carts = Some(carts);
        self
    }

    pub(crate) fn checkout(mut self, checkout: MockCheckoutService) -> Self {
        self.checkout = Some(checkout);
        self
    }

    pub(crate) fn orders(mut self, orders: MockOrdersService) -> Self {
        self.orders = Some(orders);
        self
    }

    pub(crate) fn inventory(mut self, inventory: MockInventoryService) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub(crate) fn max_receipt_bytes(mut self, limit: usize) -> Self {
        self.max_receipt_bytes = Some(limit);
        self
    }

    pub(crate) fn service(self, route: Router) -> Service {
        let app = AppContext {
            products: Arc::new(self.products.unwrap_or_else(strict_products_mock)),
            clients: Arc::new(self.clients.unwrap_or_else(strict_clients_mock)),
            carts: Arc::new(self.carts.unwrap_or_else(strict_carts_mock)),
            checkout: Arc::new(self.checkout.unwrap_or_else(strict_checkout_mock)),
            orders: Arc::new(self.orders.unwrap_or_else(strict_orders_mock)),
            inventory: Arc::new(self.inventory.unwrap_or_else(strict_inventory_mock)),
        };

        let state = State::from_app_context(
            app,
            self.max_receipt_bytes.unwrap_or(DEFAULT_MAX_RECEIPT_BYTES),
        );

        Service::new(Router::new().hoop(inject(state)).push(route))
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_clients_mock() -> MockClientsService {
    let mut clients = MockClientsService::new();

    clients.expect_list_clients().never();
    clients.expect_get_client().never();
    clients.expect_create_client().never();

    clients
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_get_order().never();
    orders.expect_list_orders().never();
    orders.expect_list_client_orders().never();
    orders.expect_update_status().never();
    orders.expect_delete_order().never();
    orders.expect_get_receipt().never();

    orders
}

fn strict_inventory_mock() -> MockInventoryService {
    let mut inventory = MockInventoryService::new();

    inventory.expect_set_stock().never();
    inventory.expect_restock().never();
    inventory.expect_low_stock().never();

    inventory
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    TestApp::new().products(products).service(route)
}

pub(crate) fn inventory_service(inventory: MockInventoryService, route: Router) -> Service {
    TestApp::new().inventory(inventory).service(route)
}

pub(crate) fn clients_service(clients: MockClientsService, route: Router) -> Service {
    TestApp::new().clients(clients).service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    TestApp::new().carts(carts).service(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    TestApp::new().orders(orders).service(route)
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Kibble 3kg".to_string(),
        category: "food".to_string(),
        price: 10_00,
        stock_quantity: 8,
        low_stock_threshold: 3,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_client(uuid: ClientUuid) -> ClientRecord {
    ClientRecord {
        uuid,
        first_name: "Lucía".to_string(),
        last_name: "Ramos".to_string(),
        email: Some("lucia@example.com".to_string()),
        phone: None,
        address: Some("Av. Arequipa 1234".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, lines: &[(u64, u64)]) -> Cart {
    let lines = lines
        .iter()
        .map(|&(unit_price, quantity)| CartLine {
            product_uuid: ProductUuid::new(),
            name: "Flea collar".to_string(),
            category: "accessories".to_string(),
            unit_price,
            quantity,
            stock_available: 10,
            stock_exempt: false,
        })
        .collect();

    Cart::restore(uuid, lines, None)
}

pub(crate) fn make_order(uuid: OrderUuid, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        uuid,
        order_number: "ORD-1767225600123".to_string(),
        channel: SalesChannel::Portal,
        client_uuid: ClientUuid::new(),
        delivery_address: Some("Av. Arequipa 1234".to_string()),
        subtotal: 25_50,
        tax_amount: 4_59,
        total_amount: 30_09,
        status,
        payment_method: "card".to_string(),
        notes: None,
        receipt_key: None,
        lines: vec![OrderLineRecord {
            uuid: OrderLineUuid::new(),
            order_uuid: uuid,
            product_uuid: ProductUuid::new(),
            name: "Kibble 3kg".to_string(),
            quantity: 2,
            unit_price: 10_00,
            total_price: 20_00,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
