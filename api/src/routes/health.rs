use std::collections::HashMap;
use std::time::Instant;

use actix_web::{web, HttpResponse};
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use hr_shared::types::ServiceHealth;
use hr_shared::{HealthResponse, HealthStatus};

use super::AppState;

/// Handler for GET /health
///
/// Responds 503 when the database does not answer.
pub async fn health<E, A, N, L>(state: web::Data<AppState<E, A, N, L>>) -> HttpResponse
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let mut services = HashMap::new();

    match &state.database {
        Some(pool) => {
            let started = Instant::now();
            let (status, message) = match pool.health_check().await {
                Ok(true) => {
                    let stats = pool.get_statistics();
                    (
                        HealthStatus::Healthy,
                        format!("{}/{} connections", stats.connections, stats.max_connections),
                    )
                }
                Ok(false) => (HealthStatus::Degraded, "Unexpected probe result".to_string()),
                Err(_) => (HealthStatus::Unhealthy, "Connection failed".to_string()),
            };

            services.insert(
                "database".to_string(),
                ServiceHealth {
                    status,
                    message: Some(message),
                    response_time_ms: Some(started.elapsed().as_millis() as u64),
                },
            );
        }
        None => {
            services.insert(
                "database".to_string(),
                ServiceHealth {
                    status: HealthStatus::Healthy,
                    message: Some("In-memory storage".to_string()),
                    response_time_ms: None,
                },
            );
        }
    }

    let response = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    if response.status == HealthStatus::Unhealthy {
        HttpResponse::ServiceUnavailable().json(response)
    } else {
        HttpResponse::Ok().json(response)
    }
}
