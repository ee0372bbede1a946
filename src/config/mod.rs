//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CREW_AHP` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use crew_ahp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ahp;
mod error;
mod server;

pub use ahp::{AhpConfig, MAX_ORDER_LIMIT};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration serving the bundled sample model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AHP engine configuration (model source, limits, reciprocal checking)
    #[serde(default)]
    pub ahp: AhpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CREW_AHP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CREW_AHP__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CREW_AHP__AHP__STRICT_RECIPROCAL=true` -> `ahp.strict_reciprocal = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CREW_AHP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ahp.validate()?;
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
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CREW_AHP__SERVER__PORT",
        "CREW_AHP__SERVER__ENVIRONMENT",
        "CREW_AHP__AHP__MODEL_PATH",
        "CREW_AHP__AHP__MAX_ORDER",
        "CREW_AHP__AHP__STRICT_RECIPROCAL",
        "CREW_AHP__AHP__RECIPROCAL_TOLERANCE",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ahp.max_order, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ahp_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CREW_AHP__AHP__MODEL_PATH", "data/crew_scheduling.yaml");
        env::set_var("CREW_AHP__AHP__MAX_ORDER", "12");
        env::set_var("CREW_AHP__AHP__STRICT_RECIPROCAL", "true");
        env::set_var("CREW_AHP__AHP__RECIPROCAL_TOLERANCE", "0.01");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.ahp.model_path.as_deref(),
            Some("data/crew_scheduling.yaml")
        );
        assert_eq!(config.ahp.max_order, 12);
        assert!(config.ahp.strict_reciprocal);
        assert!((config.ahp.reciprocal_tolerance - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CREW_AHP__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CREW_AHP__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.ahp.max_order = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxOrder { .. })
        ));
    }
}
