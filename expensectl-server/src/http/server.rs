//! Axum server setup
//!
//! Server skeleton with:
//! - Optional permissive CORS
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, bounded by a drain window

use std::future::{Future, IntoFuture};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::ExpenseRepo;
use crate::service::ExpenseService;
use crate::Result;

/// Default port, matching the service's usual deployment.
pub const DEFAULT_PORT: u16 = 2565;

/// How long in-flight requests may run after a shutdown signal.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:2565)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: false = no CORS headers)
    pub cors_permissive: bool,

    /// Drain window after a shutdown signal before the server is dropped
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            cors_permissive: false,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Build a config from a host string and port, other fields defaulted.
    pub fn from_host_port(host: &str, port: u16) -> Result<Self> {
        let ip: IpAddr = host.parse()?;
        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            ..Self::default()
        })
    }
}

/// Shared application state
pub struct AppState {
    pub service: ExpenseService,
}

impl AppState {
    pub fn new(service: ExpenseService) -> Self {
        Self { service }
    }

    /// State backed by the Postgres expense repository.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(ExpenseService::new(Arc::new(ExpenseRepo::new(pool))))
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::expenses::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// ensure_schema(&pool).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<()> {
    let app = build_router(AppState::from_pool(pool), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    serve_until(listener, app, shutdown_signal(), config.shutdown_timeout).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Serve `app` until `signal` resolves, then drain for at most `grace`.
///
/// Requests still running when the window closes are dropped with the server.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (started_tx, mut started_rx) = watch::channel(false);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            let _ = started_tx.send(true);
        })
        .into_future();

    let deadline = async move {
        let started = started_rx.wait_for(|started| *started).await.is_ok();
        if !started {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => result?,
        () = deadline => {
            tracing::warn!(
                grace_secs = grace.as_secs_f64(),
                "Shutdown window elapsed, dropping in-flight requests"
            );
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
