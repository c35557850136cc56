//! Profile service: read and partially update an employee record.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{messages, EmployeeProfile};
use crate::domain::value_objects::ProfileUpdate;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{EmployeeRepository, NotificationRepository};
use crate::services::notification::NotificationService;

pub struct ProfileService<E: EmployeeRepository, N: NotificationRepository> {
    employees: Arc<E>,
    notifications: NotificationService<N>,
}

impl<E: EmployeeRepository, N: NotificationRepository> ProfileService<E, N> {
    pub fn new(employees: Arc<E>, notifications: NotificationService<N>) -> Self {
        Self {
            employees,
            notifications,
        }
    }

    /// The employee record without its password
    pub async fn get_profile(&self, employee_id: &str) -> DomainResult<EmployeeProfile> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .map(|employee| employee.into_profile())
            .ok_or_else(|| DomainError::not_found("Employee"))
    }

    /// Apply a caller-supplied field map
    ///
    /// `id`, `email` and `password` are dropped without error. Any other key
    /// outside the allow-list is rejected. The remaining changes are written
    /// in one statement.
    pub async fn update_profile(
        &self,
        employee_id: &str,
        fields: &Map<String, Value>,
    ) -> DomainResult<EmployeeProfile> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(DomainError::not_found("Employee"));
        }

        let update = ProfileUpdate::from_fields(fields)?;

        if !self.employees.update_profile(employee_id, &update).await? {
            return Err(DomainError::not_found("Employee"));
        }

        self.notifications
            .append(employee_id, messages::PROFILE_UPDATED)
            .await;

        info!(
            employee_id = %employee_id,
            fields = update.changes().len(),
            "Profile updated"
        );
        self.get_profile(employee_id).await
    }
}
