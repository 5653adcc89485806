//! Test Helpers

use crate::domain::{
    clients::{data::NewClient, records::ClientUuid},
    products::{data::NewProduct, records::ProductUuid},
};

pub(crate) fn new_product(name: &str, category: &str, price: u64, stock: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock_quantity: stock,
        low_stock_threshold: 0,
    }
}

pub(crate) fn new_client(first_name: &str, last_name: &str) -> NewClient {
    let uuid = ClientUuid::new();

    NewClient {
        uuid,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!("{uuid}@example.test")),
        phone: None,
        address: None,
    }
}
