use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use serde_json::{Map, Value};

use crate::dto::ProfileUpdatedResponse;
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for GET /profile/{employee_id}
pub async fn get_profile<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let profile = state.profiles.get_profile(&employee_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Handler for PUT /profile/{employee_id}
///
/// The body is a flat map of profile columns. `id`, `email` and `password`
/// are ignored; unknown keys are rejected.
pub async fn update_profile<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    employee_id: web::Path<String>,
    fields: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let user = state.profiles.update_profile(&employee_id, &fields).await?;

    Ok(HttpResponse::Ok().json(ProfileUpdatedResponse {
        message: "Profile updated successfully!".to_string(),
        user,
    }))
}
