use seismos_server::config::ServerConfig;
use seismos_server::fetcher::HttpPageFetcher;
use seismos_server::routes::{self, AppState};

use anyhow::{Context, Result};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize logging
    let _logging_guard = seismos_server::logging::init_logging(
        &config.log_dir,
        "seismos-server",
        &config.log_level,
    )?;

    tracing::info!("Seismos feed starting...");
    tracing::info!("Source page: {}", config.source_url());

    let fetcher = HttpPageFetcher::new(&config).context("Failed to initialize page fetcher")?;
    let state = Arc::new(AppState {
        fetcher: Arc::new(fetcher),
        source_url: config.source_url(),
        base_url: config.base_url.clone(),
    });

    let app = routes::router(state);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received.");
        })
        .await?;

    Ok(())
}
