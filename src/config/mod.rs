//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables through the
//! `config` and `dotenvy` crates. Variables use the `EVENT_HOTELS` prefix
//! and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use event_hotels::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
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

    pub database: DatabaseConfig,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `EVENT_HOTELS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `EVENT_HOTELS__SERVER__PORT=4000` -> `server.port = 4000`
    /// - `EVENT_HOTELS__DATABASE__URL=...` -> `database.url = ...`
    /// - `EVENT_HOTELS__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_HOTELS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation across all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

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

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "EVENT_HOTELS__DATABASE__URL",
        "EVENT_HOTELS__AUTH__JWT_SECRET",
        "EVENT_HOTELS__AUTH__REQUIRE_SESSION",
        "EVENT_HOTELS__SERVER__PORT",
        "EVENT_HOTELS__SERVER__ENVIRONMENT",
    ];

    fn set_minimal_env() {
        env::set_var("EVENT_HOTELS__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("EVENT_HOTELS__AUTH__JWT_SECRET", "0123456789abcdef0123456789abcdef");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(
            config.auth.jwt_secret.expose_secret(),
            "0123456789abcdef0123456789abcdef"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.auth.require_session);
    }

    #[test]
    fn test_overrides() {
        let config = load_with(&[
            ("EVENT_HOTELS__SERVER__PORT", "5000"),
            ("EVENT_HOTELS__SERVER__ENVIRONMENT", "production"),
            ("EVENT_HOTELS__AUTH__REQUIRE_SESSION", "false"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 5000);
        assert!(config.is_production());
        assert!(!config.auth.require_session);
    }

    #[test]
    fn test_missing_database_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("EVENT_HOTELS__AUTH__JWT_SECRET", "secret");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
