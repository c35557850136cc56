use hr_core::{AuthenticatedUser, EmployeeDetails, LoginInput, RegisterInput};
use serde::{Deserialize, Serialize};

/// Body of `POST /register`
///
/// Optional profile attributes sit next to the required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(flatten)]
    pub details: EmployeeDetails,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(request: RegisterRequest) -> Self {
        RegisterInput {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            details: request.details,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(request: LoginRequest) -> Self {
        LoginInput {
            username: request.username,
            password: request.password,
            user_type: request.user_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetPasswordRequest {
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_collects_profile_fields() {
        let request: RegisterRequest = serde_json::from_value(json!({
            "first_name": "Asha",
            "last_name": "Rao",
            "email": "asha@corp.example",
            "password": "s3cret",
            "department": "Finance",
            "join_date": "2024-01-15"
        }))
        .unwrap();

        let input = RegisterInput::from(request);
        assert_eq!(input.first_name.as_deref(), Some("Asha"));
        assert_eq!(input.details.department.as_deref(), Some("Finance"));
        assert_eq!(input.details.join_date.as_deref(), Some("2024-01-15"));
        assert!(input.details.branch.is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: LoginRequest = serde_json::from_value(json!({ "username": "a@b.c" })).unwrap();
        assert!(request.password.is_none());
        assert!(request.user_type.is_none());
    }
}
