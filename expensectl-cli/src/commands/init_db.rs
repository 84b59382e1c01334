//! Create the expenses table and exit

use anyhow::{Context, Result};
use clap::Parser;

use expensectl_server::db::ensure_schema;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    ensure_schema(&pool)
        .await
        .context("Failed to create expenses table")?;

    tracing::info!("expenses table is ready");
    Ok(())
}
