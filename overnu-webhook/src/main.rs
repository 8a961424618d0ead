//! OverNu webhook plugin server.
//!
//! Serves the plugin manifest and forwards tool calls to n8n.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use overnu::{build_app, AppState, Config, N8nClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("plugin_server_starting");

    let config = Config::from_env();
    info!(
        port = config.port,
        public_base_url = %config.public_base_url,
        n8n_url_set = config.n8n_webhook_url.is_some(),
        n8n_token_set = config.n8n_webhook_token.is_some(),
        n8n_timeout_ms = ?config.n8n_timeout_ms,
        "config_loaded"
    );

    let n8n = N8nClient::from_config(&config).context("Invalid n8n configuration")?;
    info!(n8n_host = ?n8n.url().host_str(), "n8n_client_created");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_app(AppState::new(config, n8n));

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "plugin_server_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("plugin_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("plugin_server_shutting_down");
}
