//! Outbound mail configuration
//!
//! Mail delivery credentials are deployment-time settings. They are loaded once
//! and handed to the mailer constructor; nothing else reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mail delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Authenticated SMTP relay with STARTTLS
    Smtp,
    /// Log-only mailer for development and tests
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" | "console" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// SMTP delivery configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Which backend to build
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,

    /// SMTP login
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Sender address used in the From header
    pub from_address: String,

    /// Upper bound for a single delivery attempt
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@hrms.local"),
            send_timeout_secs: default_send_timeout(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_address", &self.from_address)
            .field("send_timeout_secs", &self.send_timeout_secs)
            .finish()
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let username = std::env::var("MAIL_USERNAME").unwrap_or_default();
        let from_address = std::env::var("MAIL_DEFAULT_SENDER")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| Some(username.clone()).filter(|s| !s.is_empty()))
            .unwrap_or(defaults.from_address);

        Self {
            provider: std::env::var("MAIL_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.provider),
            smtp_host: std::env::var("MAIL_SERVER").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("MAIL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.smtp_port),
            username,
            password: std::env::var("MAIL_PASSWORD").unwrap_or_default(),
            from_address,
            send_timeout_secs: std::env::var("MAIL_SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.send_timeout_secs),
        }
    }

    /// Whether SMTP credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

fn default_send_timeout() -> u64 {
    30
}
