//! Admin identity and credential hashing configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default admin login, kept for compatibility with existing clients
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "123";

/// The single out-of-band admin credential pair
///
/// This identity is never stored alongside employees. It is checked before any
/// storage lookup on the admin login path, and its email is reserved so it can
/// never be used on the employee login path.
#[derive(Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Admin login email
    pub email: String,

    /// Admin password (plaintext, compared exactly)
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: String::from(DEFAULT_ADMIN_EMAIL),
            password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminConfig {
    /// Create a new admin configuration
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }

    /// Check a login attempt against the admin pair
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Whether an email address is the reserved admin address
    pub fn is_reserved_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Password hashing parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl SecurityConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or_else(default_bcrypt_cost);

        Self { bcrypt_cost }
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}
