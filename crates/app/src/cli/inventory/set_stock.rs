use clap::Args;
use uuid::Uuid;
use vetshop_app::domain::{inventory::InventoryService, products::records::ProductUuid};

#[derive(Debug, Args)]
pub(crate) struct SetStockArgs {
    /// Product UUID
    #[arg(long)]
    product: Uuid,

    /// New on-hand quantity
    #[arg(long)]
    quantity: u64,
}

pub(crate) async fn run(service: &dyn InventoryService, args: SetStockArgs) -> Result<(), String> {
    let product = service
        .set_stock(ProductUuid::from_uuid(args.product), args.quantity)
        .await
        .map_err(|error| format!("failed to set stock: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("stock_quantity: {}", product.stock_quantity);

    Ok(())
}
