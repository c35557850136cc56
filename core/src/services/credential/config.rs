//! Configuration for the credential service

use hr_shared::{AdminConfig, AppConfig, SecurityConfig};
use std::time::Duration;

/// Configuration for the credential service
#[derive(Debug, Clone)]
pub struct CredentialServiceConfig {
    /// The out-of-band admin credential pair
    pub admin: AdminConfig,
    /// bcrypt work factor for new hashes
    pub bcrypt_cost: u32,
    /// Upper bound on a single password reset mail dispatch
    pub mail_timeout: Duration,
}

impl Default for CredentialServiceConfig {
    fn default() -> Self {
        Self {
            admin: AdminConfig::default(),
            bcrypt_cost: SecurityConfig::default().bcrypt_cost,
            mail_timeout: Duration::from_secs(30),
        }
    }
}

impl CredentialServiceConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            admin: config.admin.clone(),
            bcrypt_cost: config.security.bcrypt_cost,
            mail_timeout: Duration::from_secs(config.mail.send_timeout_secs),
        }
    }
}
