use ad_server::error::ServerError;
use ad_server::{build_router, logger, AppState};

use ad_store::{ImageStore, ListingStore};

use std::error::Error;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ad_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ad_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting ad-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Resolve storage paths and make sure they exist
    let data_path = config.data_path()?;
    let upload_path = config.upload_path()?;

    if let Some(parent) = data_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::create_dir_all(&upload_path).map_err(|e| ServerError::Io {
        path: upload_path.clone(),
        source: e,
    })?;

    info!("Listings document: {}", data_path.display());
    info!("Upload directory: {}", upload_path.display());

    // Build application state
    let state = AppState {
        store: Arc::new(ListingStore::new(data_path)),
        images: Arc::new(ImageStore::new(upload_path)),
        upload: config.upload.clone(),
    };

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
    }
}
