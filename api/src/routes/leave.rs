use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

use crate::dto::{LeaveApplicationRequest, LeaveSubmittedResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /leave-application
///
/// # Request Body
///
/// ```json
/// {
///     "employee_id": "SSQ-1001",
///     "leave_type": "Sick Leave",
///     "from_date": "2024-05-02",
///     "to_date": "2024-05-03",
///     "description": "Fever"
/// }
/// ```
///
/// `to_date` and `description` are optional. The application starts as
/// `Pending`.
pub async fn submit_leave<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    request: web::Json<LeaveApplicationRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let record = state.leave.submit(request.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(LeaveSubmittedResponse::from(record)))
}

/// Handler for GET /leave-applications/{employee_id}
pub async fn list_leave<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let applications = state.leave.list_for_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(applications))
}
