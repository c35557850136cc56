use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use hr_core::PasswordResetOutcome;
use hr_shared::MessageResponse;

use crate::dto::{ChangePasswordRequest, ForgotPasswordRequest, ResetPasswordRequest};
use crate::handlers::ApiError;
use crate::routes::AppState;

pub const RESET_ACKNOWLEDGEMENT: &str =
    "If an account with that email exists, a new password has been sent.";

/// Handler for POST /forgot-password
///
/// Known and unknown emails get the same acknowledgement. Only a delivery
/// failure after the new password was stored answers with an error.
pub async fn forgot_password<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    match state
        .credentials
        .forgot_password(request.email.as_deref())
        .await?
    {
        PasswordResetOutcome::Sent | PasswordResetOutcome::UnknownEmail => {
            Ok(HttpResponse::Ok().json(MessageResponse::new(RESET_ACKNOWLEDGEMENT)))
        }
    }
}

/// Handler for PUT /profile/change-password/{employee_id}
pub async fn change_password<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
    request: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    state
        .credentials
        .change_password(
            &employee_id,
            request.old_password.as_deref(),
            request.new_password.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password updated successfully!")))
}

/// Handler for PUT /profile/reset-password-internal/{employee_id}
///
/// Does not check the current password.
pub async fn reset_password_internal<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    state
        .credentials
        .reset_password_internal(&employee_id, request.new_password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password reset successfully!")))
}
