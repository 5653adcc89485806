//! Database Config

use clap::{ArgAction, Args};

use vetshop_app::database::PoolSettings;

/// Postgres holding the catalogue, carts and orders.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Upper bound on pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Apply pending migrations before accepting requests
    #[arg(
        long,
        env = "MIGRATE_ON_STARTUP",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub migrate_on_startup: bool,
}

impl DatabaseConfig {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.database_max_connections,
            migrate_on_startup: self.migrate_on_startup,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        database: DatabaseConfig,
    }

    #[test]
    fn pool_defaults_to_ten_connections_without_migrations() -> TestResult {
        let cli = Cli::try_parse_from(["vetshop-json", "--database-url", "postgres://db/vetshop"])?;

        assert_eq!(
            cli.database.pool_settings(),
            PoolSettings {
                max_connections: 10,
                migrate_on_startup: false,
            }
        );

        Ok(())
    }

    #[test]
    fn migrations_can_be_enabled() -> TestResult {
        let cli = Cli::try_parse_from([
            "vetshop-json",
            "--database-url",
            "postgres://db/vetshop",
            "--database-max-connections",
            "4",
            "--migrate-on-startup",
            "true",
        ])?;

        assert_eq!(cli.database.pool_settings().max_connections, 4);
        assert!(cli.database.pool_settings().migrate_on_startup, "flag should be set");

        Ok(())
    }
}
