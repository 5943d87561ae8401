//! Application-wide constants

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_APP_NAME: &str = "menu-server";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_NAME: &str = "menu";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default collection name of a mongoose model called `MenuItem`.
pub const MENU_ITEM_COLLECTION: &str = "menuitems";
