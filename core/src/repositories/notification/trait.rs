//! Notification repository trait.

use async_trait::async_trait;

use crate::domain::entities::Notification;
use crate::errors::DomainError;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn append(&self, notification: Notification) -> Result<(), DomainError>;

    /// Notifications of an employee, newest first
    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Notification>, DomainError>;

    /// Mark every unread notification of the employee as read
    ///
    /// Returns how many rows changed.
    async fn mark_all_read(&self, employee_id: &str) -> Result<u64, DomainError>;
}
