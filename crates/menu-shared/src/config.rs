//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_NAME,
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

/// Plain variables understood by earlier deployments of the service.
/// They take precedence over every other source.
#[derive(Debug, Default, Clone)]
pub struct LegacyOverrides {
    pub port: Option<String>,
    pub mongo_uri: Option<String>,
}

impl LegacyOverrides {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            mongo_uri: std::env::var("MONGO_URI").ok(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        Self::load_for(&env, LegacyOverrides::from_env())
    }

    pub fn load_for(env: &str, overrides: LegacyOverrides) -> Result<Self, AppError> {
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("database.name", DEFAULT_DATABASE_NAME)?
            .set_default("database.connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS as i64)?
            .set_default(
                "database.server_selection_timeout_secs",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS as i64,
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override_option("app.port", overrides.port)?
            .set_override_option("database.url", overrides.mongo_uri)?
            .build()?;

        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::InvalidSetting(
                "database.url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_with_legacy_uri() {
        let config = AppConfig::load_for(
            "test",
            LegacyOverrides {
                port: None,
                mongo_uri: Some("mongodb://localhost:27017".to_string()),
            },
        )
        .unwrap();

        assert_eq!(config.app.env, "test");
        assert_eq!(config.app.port, DEFAULT_PORT);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, DEFAULT_DATABASE_NAME);
    }

    #[test]
    fn test_legacy_port_override() {
        let config = AppConfig::load_for(
            "test",
            LegacyOverrides {
                port: Some("6001".to_string()),
                mongo_uri: Some("mongodb://db:27017".to_string()),
            },
        )
        .unwrap();

        assert_eq!(config.app.port, 6001);
    }

    #[test]
    fn test_blank_database_url_rejected() {
        let result = AppConfig::load_for(
            "test",
            LegacyOverrides {
                port: None,
                mongo_uri: Some("   ".to_string()),
            },
        );

        assert!(matches!(result, Err(AppError::InvalidSetting(_))));
    }
}
