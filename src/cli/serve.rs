use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use tracing::{info, warn};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8050;

pub async fn handle_serve(args: ServeArgs, config: DashboardConfig) -> Result<(), DashboardError> {
    let host = args.host.as_deref().or(config.host()).unwrap_or(DEFAULT_HOST).to_string();
    let port = args.port.or(config.port()).unwrap_or(DEFAULT_PORT);
    info!(host = %host, port, "Starting dashboard server");

    let store = super::open_store(args.dataset.as_deref(), &config).await?;
    let state = api::create_app_state(store, &config.slider(), config.session_limits());
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashboardError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
