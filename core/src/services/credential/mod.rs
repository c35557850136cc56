//! Credential service module
//!
//! Registration, login for both user kinds, and the three password flows.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::CredentialServiceConfig;
pub use password::{generate_temporary_password, TEMPORARY_PASSWORD_LENGTH};
pub use service::{CredentialService, LoginInput, PasswordResetOutcome, RegisterInput};
