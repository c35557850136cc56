use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

use crate::dto::MarkReadResponse;
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for GET /notifications/{employee_id}
///
/// Newest first. An employee without notifications gets an empty list.
pub async fn list_notifications<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let notifications = state.notifications.list(&employee_id).await?;
    Ok(HttpResponse::Ok().json(notifications))
}

/// Handler for PUT /notifications/mark-read/{employee_id}
pub async fn mark_read<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let count = state.notifications.mark_all_read(&employee_id).await?;
    Ok(HttpResponse::Ok().json(MarkReadResponse::new(count)))
}
