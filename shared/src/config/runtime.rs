//! Deployment mode and log output settings
//!
//! The server only distinguishes two modes. Production tightens CORS to the
//! configured origins and switches logs to JSON; everything else runs as
//! development.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment mode read from `ENV` (or `RUST_ENV`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn from_env() -> Self {
        let label = env::var("ENV").or_else(|_| env::var("RUST_ENV")).ok();
        Self::from_label(label.as_deref())
    }

    /// Anything that is not a production alias falls back to development
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("production" | "prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscriber output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

/// Log filter and format for the tracing subscriber
///
/// `RUST_LOG`, when set, still takes precedence over `level` at install time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `debug,sqlx=warn`
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::resolve(Environment::Development, None, None)
    }
}

impl LoggingConfig {
    /// Read `LOG_LEVEL` and `LOG_FORMAT` over the defaults for `environment`
    pub fn from_env(environment: Environment) -> Self {
        Self::resolve(
            environment,
            env::var("LOG_LEVEL").ok(),
            env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Apply overrides on top of the per-mode defaults; blank or unknown
    /// overrides are ignored
    pub fn resolve(environment: Environment, level: Option<String>, format: Option<&str>) -> Self {
        let level = level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| match environment {
                // sqlx logs every statement at debug
                Environment::Development => String::from("debug,sqlx=warn"),
                Environment::Production => String::from("info"),
            });

        let format = format
            .and_then(|f| f.parse().ok())
            .unwrap_or(match environment {
                Environment::Development => LogFormat::Pretty,
                Environment::Production => LogFormat::Json,
            });

        Self { level, format }
    }
}
