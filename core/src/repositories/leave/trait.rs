//! Leave repository trait.

use async_trait::async_trait;

use crate::domain::entities::LeaveApplication;
use crate::errors::DomainError;

#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Fails with `NotFound` when the employee does not exist.
    async fn create(&self, application: LeaveApplication) -> Result<LeaveApplication, DomainError>;

    /// Applications of an employee, most recently submitted first
    async fn list_for_employee(&self, employee_id: &str)
        -> Result<Vec<LeaveApplication>, DomainError>;
}
