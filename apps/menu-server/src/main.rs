use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::signal;
use tracing::{error, info, warn};

use menu_api::{build_router, AppState};
use menu_infrastructure::database::{connection, ensure_menu_item_collection, MongoMenuItemRepository};
use menu_shared::config::AppConfig;
use menu_shared::constants::DEFAULT_LOG_FILTER;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry(DEFAULT_LOG_FILTER);

    info!("Menu server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to MongoDB; the service is useless without it
    let database = match connection::connect(&config.database, &config.app.name).await {
        Ok(db) => db,
        Err(e) => {
            error!("Error connecting to MongoDB: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = ensure_menu_item_collection(&database).await {
        error!("Failed to prepare menu item collection: {}", e);
        std::process::exit(1);
    }

    let repository = Arc::new(MongoMenuItemRepository::new(database));
    let app = build_router(AppState::new(repository));

    // Bind address
    let host: IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
