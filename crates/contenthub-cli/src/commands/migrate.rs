//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use contenthub_core::config::StoreProvider;
use contenthub_core::error::AppError;
use contenthub_database::DatabasePool;
use contenthub_database::migration::run_migrations;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider == StoreProvider::Memory {
                output::print_warning("Memory store configured; nothing to migrate.");
                return Ok(());
            }

            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            let result = run_migrations(pool.pool()).await;
            pool.close().await;
            result?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
