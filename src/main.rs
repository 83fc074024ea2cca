use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use videogames::core::{Config, database};
use videogames::{AppState, create_router, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;
    config.print_info();

    // Pool, migrations e wiring esplicito repository -> service -> state
    let pool = database::connect(&config.database_url, config.max_connections).await?;
    let state = Arc::new(AppState::from_pool(pool));

    seed::preload(&state.videogames).await?;
    info!("Catalog contains {} videogames", state.videogames.count().await?);

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
