//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource already exists: {resource}")]
    Conflict { resource: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Mail delivery failed: {message}")]
    MailDelivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Wrap a persistence-layer failure
    pub fn storage(message: impl std::fmt::Display) -> Self {
        DomainError::Storage {
            message: message.to_string(),
        }
    }

    /// Shorthand for a missing entity
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::Conflict { .. } => "CONFLICT",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Storage { .. } => "STORAGE_ERROR",
            DomainError::MailDelivery { .. } => "MAIL_DELIVERY_FAILED",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.code(),
            DomainError::ValidationErr(err) => err.code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
