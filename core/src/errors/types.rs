//! Error types for credential checks and request validation

use thiserror::Error;

/// Credential mismatch errors
///
/// Employee login deliberately reports the same error whether the account is
/// missing or the password is wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid Admin credentials")]
    InvalidAdminCredentials,

    #[error("Invalid employee credentials")]
    InvalidEmployeeCredentials,

    #[error("Incorrect old password")]
    IncorrectOldPassword,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidAdminCredentials => "INVALID_ADMIN_CREDENTIALS",
            AuthError::InvalidEmployeeCredentials => "INVALID_EMPLOYEE_CREDENTIALS",
            AuthError::IncorrectOldPassword => "INCORRECT_OLD_PASSWORD",
        }
    }
}

/// Missing or malformed caller input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid date for field {field}, expected YYYY-MM-DD")]
    InvalidDate { field: String },

    #[error("Invalid value for field: {field}")]
    InvalidValue { field: String },

    #[error("Invalid user type specified: {value}")]
    UnknownUserType { value: String },

    #[error("Field cannot be updated: {field}")]
    UnknownField { field: String },

    #[error("No valid fields to update")]
    NoUpdatableFields,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidDate { .. } => "INVALID_DATE",
            ValidationError::InvalidValue { .. } => "INVALID_VALUE",
            ValidationError::UnknownUserType { .. } => "INVALID_USER_TYPE",
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
            ValidationError::NoUpdatableFields => "NO_UPDATABLE_FIELDS",
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }
}
