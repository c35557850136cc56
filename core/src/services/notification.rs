//! Per-employee notification feed.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::Notification;
use crate::errors::DomainResult;
use crate::repositories::NotificationRepository;

/// Notification service wrapping the feed repository
pub struct NotificationService<N: NotificationRepository> {
    repository: Arc<N>,
}

impl<N: NotificationRepository> Clone for NotificationService<N> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<N: NotificationRepository> NotificationService<N> {
    pub fn new(repository: Arc<N>) -> Self {
        Self { repository }
    }

    /// Append a message to the employee's feed
    ///
    /// Failures are logged and swallowed; the caller's operation has already
    /// committed and must still report success.
    pub async fn append(&self, employee_id: &str, message: impl Into<String>) {
        let notification = Notification::new(employee_id, message);
        match self.repository.append(notification).await {
            Ok(()) => debug!(employee_id = %employee_id, "Notification appended"),
            Err(e) => warn!(
                employee_id = %employee_id,
                error = %e,
                "Failed to append notification"
            ),
        }
    }

    /// All notifications, newest first, read and unread alike
    pub async fn list(&self, employee_id: &str) -> DomainResult<Vec<Notification>> {
        self.repository.list_for_employee(employee_id).await
    }

    /// Mark every unread notification read; returns how many changed
    pub async fn mark_all_read(&self, employee_id: &str) -> DomainResult<u64> {
        let count = self.repository.mark_all_read(employee_id).await?;
        debug!(employee_id = %employee_id, count, "Notifications marked as read");
        Ok(count)
    }
}
