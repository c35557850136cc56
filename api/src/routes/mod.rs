//! Route handlers grouped by workflow
//!
//! - `auth` - Registration, login and password management
//! - `profile` - Profile read and partial update
//! - `notifications` - Notification feed
//! - `leave` - Leave applications
//! - `attendance` - Check-in and check-out
//! - `health` - Liveness and database health

pub mod attendance;
pub mod auth;
pub mod health;
pub mod leave;
pub mod notifications;
pub mod profile;

use std::sync::Arc;

use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use hr_core::services::{
    AttendanceService, CredentialService, CredentialServiceConfig, LeaveService, Mailer,
    NotificationService, ProfileService,
};
use hr_infra::DatabasePool;

/// Application state that holds shared services
///
/// Generic over the four repositories so the same handlers serve MySQL in
/// production and the in-memory store in tests.
pub struct AppState<E, A, N, L>
where
    E: EmployeeRepository,
    A: AttendanceRepository,
    N: NotificationRepository,
    L: LeaveRepository,
{
    pub credentials: CredentialService<E, N, dyn Mailer>,
    pub profiles: ProfileService<E, N>,
    pub notifications: NotificationService<N>,
    pub attendance: AttendanceService<A>,
    pub leave: LeaveService<L, N>,
    /// Present when backed by MySQL; checked by `/health`
    pub database: Option<DatabasePool>,
}

impl<E, A, N, L> AppState<E, A, N, L>
where
    E: EmployeeRepository,
    A: AttendanceRepository,
    N: NotificationRepository,
    L: LeaveRepository,
{
    pub fn new(
        employees: Arc<E>,
        attendance: Arc<A>,
        notifications: Arc<N>,
        leaves: Arc<L>,
        mailer: Arc<dyn Mailer>,
        config: CredentialServiceConfig,
    ) -> Self {
        let notifications = NotificationService::new(notifications);

        Self {
            credentials: CredentialService::new(
                employees.clone(),
                notifications.clone(),
                mailer,
                config,
            ),
            profiles: ProfileService::new(employees, notifications.clone()),
            attendance: AttendanceService::new(attendance),
            leave: LeaveService::new(leaves, notifications.clone()),
            notifications,
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
