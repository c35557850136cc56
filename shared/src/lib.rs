//! Shared utilities and common types for the HRMS server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures for the HTTP boundary
//! - Utility functions (email masking and validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AdminConfig, AppConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig,
    SecurityConfig, ServerConfig,
};
pub use types::{ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
pub use utils::validation;
