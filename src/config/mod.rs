//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUNUTECH` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use sunutech_agent::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod database;
mod error;
mod retrieval;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use retrieval::RetrievalConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite catalog and orders)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Generation backend configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Documentation retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUNUTECH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SUNUTECH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SUNUTECH__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUNUTECH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, section by section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        self.retrieval.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SUNUTECH__AI__OPENAI_API_KEY",
        "SUNUTECH__AI__TEMPERATURE",
        "SUNUTECH__SERVER__PORT",
        "SUNUTECH__SERVER__ENVIRONMENT",
        "SUNUTECH__DATABASE__URL",
        "SUNUTECH__DATABASE__SEED_DEMO_DATA",
        "SUNUTECH__RETRIEVAL__TOP_K",
    ];

    fn set_minimal_env() {
        env::set_var("SUNUTECH__AI__OPENAI_API_KEY", "sk-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SUNUTECH__DATABASE__URL", "sqlite://test.sqlite");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite://test.sqlite");
        assert_eq!(
            config.ai.openai_api_key.unwrap().expose_secret(),
            "sk-test"
        );
    }

    #[test]
    fn test_defaults_validate_once_key_is_set() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite://sunutech_db.sqlite");
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.retrieval.top_k, 3);
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let config = AppConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SUNUTECH__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_typed_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SUNUTECH__SERVER__PORT", "3000");
        env::set_var("SUNUTECH__DATABASE__SEED_DEMO_DATA", "true");
        env::set_var("SUNUTECH__RETRIEVAL__TOP_K", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.database.seed_demo_data);
        assert_eq!(config.retrieval.top_k, 5);
    }
}
