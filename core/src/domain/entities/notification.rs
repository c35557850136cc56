//! Per-employee notification feed entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message texts appended by the workflows
pub mod messages {
    pub const PASSWORD_RESET_BY_EMAIL: &str = "Your password was reset via email request.";
    pub const PASSWORD_CHANGED: &str = "Your password was changed successfully.";
    pub const PASSWORD_RESET_INTERNAL: &str = "Your password was reset from within your session.";
    pub const PROFILE_UPDATED: &str = "Your profile details have been updated.";

    pub fn leave_submitted(leave_type: &str) -> String {
        format!("Your request for {} has been submitted.", leave_type)
    }
}

/// Append-only read/unread message attached to one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: String,
    pub employee_id: String,
    pub message: String,
    pub is_read: bool,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(employee_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            message: message.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let notification = Notification::new("SSQ-1001", messages::PROFILE_UPDATED);
        assert!(!notification.is_read);
        assert_eq!(notification.employee_id, "SSQ-1001");
    }

    #[test]
    fn test_leave_message() {
        assert_eq!(
            messages::leave_submitted("Sick Leave"),
            "Your request for Sick Leave has been submitted."
        );
    }
}
