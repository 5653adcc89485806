use clap::{Parser, Subcommand};

mod inventory;
mod migrate;

#[derive(Debug, Parser)]
#[command(name = "vetshop-app", about = "Clinic shop admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),

    /// Inspect and correct stock levels
    Inventory(inventory::InventoryCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Inventory(command) => inventory::run(command).await,
        }
    }
}
