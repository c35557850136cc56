//! Translation of domain errors into HTTP responses

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use hr_core::DomainError;
use hr_shared::ErrorResponse;

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const MAIL_DELIVERY_MESSAGE: &str =
    "Your password was reset but the email could not be delivered. Please request a new password.";

/// Error returned by every route handler
///
/// The optional message replaces the default client-facing text for the
/// wrapped error without changing its status or code.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    message: Option<String>,
}

impl ApiError {
    pub fn new(error: DomainError) -> Self {
        Self {
            error,
            message: None,
        }
    }

    pub fn with_message(error: DomainError, message: impl Into<String>) -> Self {
        Self {
            error,
            message: Some(message.into()),
        }
    }

    /// Text shown to the caller; server-side failures never expose their cause
    fn client_message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }

        match &self.error {
            DomainError::Validation { message } => message.clone(),
            DomainError::ValidationErr(err) => err.to_string(),
            DomainError::Auth(err) => err.to_string(),
            DomainError::NotFound { resource } => format!("{} not found", resource),
            DomainError::Conflict { resource } => format!("{} already exists", resource),
            DomainError::MailDelivery { .. } => MAIL_DELIVERY_MESSAGE.to_string(),
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.error {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::Storage { .. }
            | DomainError::MailDelivery { .. }
            | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error.code(), error = %self.error, "Request failed");
        } else {
            tracing::debug!(code = self.error.code(), error = %self.error, "Request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.error.code(), self.client_message()))
    }
}

/// Reject malformed JSON bodies with the same envelope as domain errors
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Malformed JSON body");

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "INVALID_JSON",
        format!("Invalid request body: {}", err),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use hr_core::{AuthError, ValidationError};

    async fn body_of(error: ApiError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (DomainError::from(ValidationError::required("email")), StatusCode::BAD_REQUEST),
            (DomainError::from(AuthError::InvalidEmployeeCredentials), StatusCode::UNAUTHORIZED),
            (DomainError::not_found("Employee"), StatusCode::NOT_FOUND),
            (
                DomainError::Conflict {
                    resource: "Employee".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::storage("pool timed out"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                DomainError::MailDelivery {
                    message: "relay refused".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status_code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_storage_error_hides_details() {
        let body = body_of(DomainError::storage("Access denied for user 'hr'@'10.0.0.4'").into()).await;

        assert_eq!(body["error"], "STORAGE_ERROR");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.4"));
    }

    #[actix_web::test]
    async fn test_message_override_keeps_code() {
        let error = ApiError::with_message(
            DomainError::not_found("Attendance record"),
            "Attendance record not found or already logged out",
        );
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let body = body_of(error).await;
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Attendance record not found or already logged out");
    }
}
