//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository and mail traits.
//!
//! - **Database**: MySQL connection pool, schema bootstrap and repositories using SQLx
//! - **Mail**: SMTP delivery through lettre, plus a logging mock for development

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - password reset delivery
pub mod mail;

pub use database::{
    ensure_schema, DatabasePool, MySqlAttendanceRepository, MySqlEmployeeRepository,
    MySqlLeaveRepository, MySqlNotificationRepository,
};
pub use mail::{create_mailer, MockMailer, SmtpMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or schema error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for hr_core::DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Mail(message) => hr_core::DomainError::MailDelivery { message },
            other => hr_core::DomainError::storage(other),
        }
    }
}
