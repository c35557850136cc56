//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Fixed admin identity and password hashing parameters
//! - `database` - Database connection and pool configuration
//! - `mail` - Outbound transactional mail delivery
//! - `runtime` - Deployment mode and log output
//! - `server` - HTTP server binding

pub mod auth;
pub mod database;
pub mod mail;
pub mod runtime;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AdminConfig, SecurityConfig};
pub use database::DatabaseConfig;
pub use mail::{MailConfig, MailProvider};
pub use runtime::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
///
/// Loaded once at startup and treated as immutable afterwards. Services receive
/// the pieces they need as explicit constructor arguments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Fixed admin identity
    pub admin: AdminConfig,

    /// Password hashing parameters
    #[serde(default)]
    pub security: SecurityConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            admin: AdminConfig::default(),
            security: SecurityConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let logging = LoggingConfig::from_env(environment);

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            admin: AdminConfig::from_env(),
            security: SecurityConfig::from_env(),
            mail: MailConfig::from_env(),
            logging,
        }
    }
}
