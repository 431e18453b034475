//! Application configuration module
//!
//! Configuration is read from environment variables with the `CONTACTS_API`
//! prefix, using `__` between nested keys. A `.env` file is honoured in
//! development.
//!
//! # Example
//!
//! ```no_run
//! use contacts_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL settings. `None` selects the in-memory stores.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// - `CONTACTS_API__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTACTS_API__DATABASE__URL=...` -> `database.url = ...`
    /// - `CONTACTS_API__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTACTS_API")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.auth.validate(self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
