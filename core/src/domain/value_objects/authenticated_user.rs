//! Result of a successful login.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::entities::EmployeeProfile;
use crate::errors::ValidationError;

/// Which login path a caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Employee,
}

impl FromStr for UserType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserType::Admin),
            "employee" => Ok(UserType::Employee),
            other => Err(ValidationError::UnknownUserType {
                value: other.to_string(),
            }),
        }
    }
}

/// The fixed identity returned for the configured admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
}

impl AdminIdentity {
    pub const ID: &'static str = "ADMIN-001";

    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Self::ID.to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: email.into(),
            user_type: UserType::Admin,
        }
    }
}

/// Logged-in user as handed back to the client, never carrying a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthenticatedUser {
    Admin(AdminIdentity),
    Employee(EmployeeProfile),
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthenticatedUser::Admin(_))
    }

    pub fn id(&self) -> &str {
        match self {
            AuthenticatedUser::Admin(admin) => &admin.id,
            AuthenticatedUser::Employee(profile) => &profile.id,
        }
    }
}
