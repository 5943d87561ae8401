//! Database connection bootstrap

use mongodb::{bson::doc, error::Error, options::ClientOptions, Client, Database};
use std::time::Duration;
use tracing::info;

use menu_shared::config::DatabaseSettings;

/// Opens a client and pings the server so an unreachable store fails at startup
/// instead of on the first request.
pub async fn connect(settings: &DatabaseSettings, app_name: &str) -> Result<Database, Error> {
    let mut options = ClientOptions::parse(&settings.url).await?;
    options.app_name = Some(app_name.to_string());
    options.connect_timeout = Some(Duration::from_secs(settings.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(settings.server_selection_timeout_secs));

    let client = Client::with_options(options)?;
    let database = client.database(&settings.name);

    database.run_command(doc! { "ping": 1 }).await?;
    info!("MongoDB connected, database: {}", settings.name);

    Ok(database)
}
