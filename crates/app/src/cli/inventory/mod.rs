use clap::{Args, Subcommand};
use vetshop_app::{
    database::{self, Db},
    domain::inventory::{PgInventoryService, policy::StockPolicy},
};

mod low_stock;
mod set_stock;

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    /// Category tag of items that carry no stock
    #[arg(long, env = "SERVICE_CATEGORY", default_value = "service", global = true)]
    service_category: String,

    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// List products at or below their reorder threshold
    LowStock,

    /// Overwrite a product's stock after a count
    SetStock(set_stock::SetStockArgs),
}

pub(crate) async fn run(command: InventoryCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "DATABASE_URL is required".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgInventoryService::new(Db::new(pool), StockPolicy::new(command.service_category));

    match command.command {
        InventorySubcommand::LowStock => low_stock::run(&service).await,
        InventorySubcommand::SetStock(args) => set_stock::run(&service, args).await,
    }
}
