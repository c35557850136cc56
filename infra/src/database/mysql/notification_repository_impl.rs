//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use hr_core::domain::entities::Notification;
use hr_core::errors::DomainError;
use hr_core::repositories::NotificationRepository;

use super::{column, query_failed};

pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn append(&self, notification: Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (notification_id, employee_id, message, is_read, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&notification.notification_id)
        .bind(&notification.employee_id)
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to append notification", e))?;

        Ok(())
    }

    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT notification_id, employee_id, message, is_read, created_at
            FROM notifications
            WHERE employee_id = ?
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to list notifications", e))?;

        rows.iter()
            .map(|row| {
                Ok(Notification {
                    notification_id: row
                        .try_get("notification_id")
                        .map_err(|e| column("notification_id", e))?,
                    employee_id: row.try_get("employee_id").map_err(|e| column("employee_id", e))?,
                    message: row.try_get("message").map_err(|e| column("message", e))?,
                    is_read: row.try_get("is_read").map_err(|e| column("is_read", e))?,
                    created_at: row.try_get("created_at").map_err(|e| column("created_at", e))?,
                })
            })
            .collect()
    }

    async fn mark_all_read(&self, employee_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE employee_id = ? AND is_read = FALSE",
        )
        .bind(employee_id)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to mark notifications read", e))?;

        Ok(result.rows_affected())
    }
}
