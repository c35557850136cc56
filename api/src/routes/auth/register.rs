use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

use crate::dto::{RegisterRequest, RegisterResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /register
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Asha",
///     "last_name": "Rao",
///     "email": "asha@corp.example",
///     "password": "s3cret",
///     "department": "Finance"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"message": "Registration successful!", "id": "SSQ-1001"}`.
/// A duplicate email answers `409`.
pub async fn register<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let id = state.credentials.register(request.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registration successful!".to_string(),
        id,
    }))
}
