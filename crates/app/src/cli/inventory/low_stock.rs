use vetshop_app::domain::inventory::InventoryService;

pub(crate) async fn run(service: &dyn InventoryService) -> Result<(), String> {
    let products = service
        .low_stock()
        .await
        .map_err(|error| format!("failed to list low stock products: {error}"))?;

    if products.is_empty() {
        println!("no products are low on stock");
        return Ok(());
    }

    for product in products {
        println!(
            "{}\t{}\tstock={}\tthreshold={}",
            product.uuid, product.name, product.stock_quantity, product.low_stock_threshold
        );
    }

    Ok(())
}
