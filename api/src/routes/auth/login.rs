use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /login
///
/// `user_type` selects the admin or employee path. The returned user never
/// carries a password.
pub async fn login<E, A, N, L>(
    state: web::Data<AppState<E, A, N, L>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let user = state.credentials.login(request.into_inner().into()).await?;

    let message = if user.is_admin() {
        "Admin login successful!"
    } else {
        "Login successful!"
    };

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: message.to_string(),
        user,
    }))
}
