use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use hr_api::app::create_app;
use hr_api::routes::AppState;
use hr_api::telemetry::init_tracing;
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, InMemoryStore, LeaveRepository,
    NotificationRepository,
};
use hr_core::services::{CredentialServiceConfig, Mailer};
use hr_infra::{
    create_mailer, ensure_schema, DatabasePool, MySqlAttendanceRepository,
    MySqlEmployeeRepository, MySqlLeaveRepository, MySqlNotificationRepository,
};
use hr_shared::{AppConfig, Environment, ServerConfig};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting HRMS API server");

    let mailer = create_mailer(&config.mail);
    let credentials = CredentialServiceConfig::from_app_config(&config);

    if std::env::var("DATABASE_URL").is_ok() {
        let pool = DatabasePool::new(config.database.clone())
            .await
            .context("failed to connect to MySQL")?;
        ensure_schema(pool.get_pool())
            .await
            .context("failed to create schema")?;

        let mysql = pool.get_pool().clone();
        let state = AppState::new(
            Arc::new(MySqlEmployeeRepository::new(mysql.clone())),
            Arc::new(MySqlAttendanceRepository::new(mysql.clone())),
            Arc::new(MySqlNotificationRepository::new(mysql.clone())),
            Arc::new(MySqlLeaveRepository::new(mysql)),
            mailer,
            credentials,
        )
        .with_database(pool.clone());

        let result = serve(state, &config.server, config.environment).await;
        pool.close().await;
        result
    } else {
        warn!("DATABASE_URL not set, using in-memory storage; data is lost on exit");
        serve(memory_state(mailer, credentials), &config.server, config.environment).await
    }
}

fn memory_state(
    mailer: Arc<dyn Mailer>,
    credentials: CredentialServiceConfig,
) -> AppState<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        mailer,
        credentials,
    )
}

async fn serve<E, A, N, L>(
    state: AppState<E, A, N, L>,
    server: &ServerConfig,
    environment: Environment,
) -> anyhow::Result<()>
where
    E: EmployeeRepository + 'static,
    A: AttendanceRepository + 'static,
    N: NotificationRepository + 'static,
    L: LeaveRepository + 'static,
{
    let bind_address = server.bind_address();
    let state = web::Data::new(state);

    let mut http = HttpServer::new(move || create_app(state.clone(), environment));
    if server.workers > 0 {
        http = http.workers(server.workers);
    }

    info!(address = %bind_address, "Server listening");

    http.bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
