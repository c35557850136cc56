//! Application factory
//!
//! Builds the Actix-web application from a shared [`AppState`]. Used by the
//! server binary and by the integration tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use hr_shared::{Environment, ErrorResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::{attendance, auth, health, leave, notifications, profile, AppState};

/// Create and configure the application with all routes
pub fn create_app<E, A, N, L>(
    app_state: web::Data<AppState<E, A, N, L>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // CORS inside, request span outermost
        .wrap(create_cors(environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health::<E, A, N, L>))
        // Identity
        .route("/register", web::post().to(auth::register::<E, A, N, L>))
        .route("/login", web::post().to(auth::login::<E, A, N, L>))
        .route(
            "/forgot-password",
            web::post().to(auth::forgot_password::<E, A, N, L>),
        )
        .service(
            web::scope("/profile")
                .route(
                    "/change-password/{employee_id}",
                    web::put().to(auth::change_password::<E, A, N, L>),
                )
                .route(
                    "/reset-password-internal/{employee_id}",
                    web::put().to(auth::reset_password_internal::<E, A, N, L>),
                )
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(profile::get_profile::<E, A, N, L>))
                        .route(web::put().to(profile::update_profile::<E, A, N, L>)),
                ),
        )
        // Notifications
        .route(
            "/notifications/mark-read/{employee_id}",
            web::put().to(notifications::mark_read::<E, A, N, L>),
        )
        .route(
            "/notifications/{employee_id}",
            web::get().to(notifications::list_notifications::<E, A, N, L>),
        )
        // Leave
        .route(
            "/leave-application",
            web::post().to(leave::submit_leave::<E, A, N, L>),
        )
        .route(
            "/leave-applications/{employee_id}",
            web::get().to(leave::list_leave::<E, A, N, L>),
        )
        // Attendance
        .route(
            "/attendance/login",
            web::post().to(attendance::attendance_login::<E, A, N, L>),
        )
        .route(
            "/attendance/logout/{record_id}",
            web::put().to(attendance::attendance_logout::<E, A, N, L>),
        )
        .route(
            "/attendance/{employee_id}",
            web::get().to(attendance::list_attendance::<E, A, N, L>),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
