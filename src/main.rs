//! Content Wizard server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use content_wizard::adapters::ai::provider_from_config;
use content_wizard::adapters::storage::IdleSessionSweeper;
use content_wizard::adapters::{app_router, InMemoryWizardStore, LlmContentBackend};
use content_wizard::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let provider = provider_from_config(&config.ai)?;
    let backend = Arc::new(
        LlmContentBackend::new(provider).with_max_output_tokens(config.ai.max_output_tokens),
    );
    let store = Arc::new(InMemoryWizardStore::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = IdleSessionSweeper::new(
        store.clone(),
        config.server.session_idle_timeout(),
        config.server.session_sweep_interval(),
    );
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let app = app_router(&config, store, backend);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "content-wizard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Receiver gone means the sweeper already exited
    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper_task.await {
        tracing::warn!(error = %e, "Idle session sweeper did not stop cleanly");
    }

    tracing::info!("content-wizard stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
