//! MySQL implementation of the LeaveRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use hr_core::domain::entities::{LeaveApplication, LeaveStatus};
use hr_core::errors::DomainError;
use hr_core::repositories::LeaveRepository;

use super::{column, is_foreign_key_violation, query_failed};

pub struct MySqlLeaveRepository {
    pool: MySqlPool,
}

impl MySqlLeaveRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &sqlx::mysql::MySqlRow) -> Result<LeaveApplication, DomainError> {
        let status: String = row.try_get("status").map_err(|e| column("status", e))?;

        Ok(LeaveApplication {
            record_id: row.try_get("record_id").map_err(|e| column("record_id", e))?,
            employee_id: row.try_get("employee_id").map_err(|e| column("employee_id", e))?,
            leave_type: row.try_get("leave_type").map_err(|e| column("leave_type", e))?,
            from_date: row.try_get("from_date").map_err(|e| column("from_date", e))?,
            to_date: row.try_get("to_date").map_err(|e| column("to_date", e))?,
            description: row.try_get("description").map_err(|e| column("description", e))?,
            status: LeaveStatus::from(status),
            submitted_at: row.try_get("submitted_at").map_err(|e| column("submitted_at", e))?,
        })
    }
}

#[async_trait]
impl LeaveRepository for MySqlLeaveRepository {
    async fn create(&self, application: LeaveApplication) -> Result<LeaveApplication, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO leave_applications (
                record_id, employee_id, leave_type, from_date, to_date,
                description, status, submitted_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&application.record_id)
        .bind(&application.employee_id)
        .bind(&application.leave_type)
        .bind(application.from_date)
        .bind(application.to_date)
        .bind(&application.description)
        .bind(application.status.as_str())
        .bind(application.submitted_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(application),
            Err(e) if is_foreign_key_violation(&e) => Err(DomainError::not_found("Employee")),
            Err(e) => Err(query_failed("Failed to insert leave application", e)),
        }
    }

    async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT record_id, employee_id, leave_type, from_date, to_date,
                   description, status, submitted_at
            FROM leave_applications
            WHERE employee_id = ?
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to list leave applications", e))?;

        rows.iter().map(Self::row_to_application).collect()
    }
}
