//! HTTP server command for the expense API
//!
//! Connects, ensures the table exists, then serves until interrupted.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use expensectl_server::db::ensure_schema;
use expensectl_server::http::server::DEFAULT_PORT;
use expensectl_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (`2565` or `:2565`)
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Seconds to let in-flight requests finish after Ctrl+C/SIGTERM
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout: u64,
}

/// Accept a bare port or an address-style `:port`.
fn parse_port(raw: &str) -> Result<u16, String> {
    let digits = raw.trim().trim_start_matches(':');
    digits
        .parse::<u16>()
        .map_err(|e| format!("invalid port '{}': {}", raw, e))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        cors_permissive: args.cors_permissive,
        shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
        ..ServerConfig::from_host_port(&args.host, args.port)
            .with_context(|| format!("Invalid host '{}'", args.host))?
    };

    let pool = args.database.connect().await?;
    ensure_schema(&pool)
        .await
        .context("Failed to create expenses table")?;

    tracing::info!("Starting expensectl server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
