use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use hr_core::DomainError;

use crate::dto::{AttendanceLoginRequest, AttendanceLoginResponse, AttendanceLogoutResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// A missing record and an already closed one are reported alike
const LOGOUT_NOT_FOUND: &str = "Attendance record not found or already logged out";

/// Handler for POST /attendance/login
///
/// Opens a session stamped with the server's wall-clock time.
pub async fn attendance_login<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    request: web::Json<AttendanceLoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let record = state.attendance.login(request.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(AttendanceLoginResponse {
        message: "Login recorded successfully!".to_string(),
        record,
    }))
}

/// Handler for PUT /attendance/logout/{record_id}
pub async fn attendance_logout<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    record_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let logout_time = state
        .attendance
        .logout(&record_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => ApiError::with_message(e, LOGOUT_NOT_FOUND),
            other => ApiError::from(other),
        })?;

    Ok(HttpResponse::Ok().json(AttendanceLogoutResponse {
        message: "Logout recorded successfully!".to_string(),
        logout_time,
    }))
}

/// Handler for GET /attendance/{employee_id}
///
/// Newest first, each entry carrying the employee's current full name.
pub async fn list_attendance<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let entries = state.attendance.list_for_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(entries))
}
