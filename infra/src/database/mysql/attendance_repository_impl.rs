//! MySQL implementation of the AttendanceRepository trait.

use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::{MySqlPool, Row};

use hr_core::domain::entities::{AttendanceEntry, AttendanceRecord};
use hr_core::errors::DomainError;
use hr_core::repositories::AttendanceRepository;

use super::{column, is_foreign_key_violation, query_failed};

pub struct MySqlAttendanceRepository {
    pool: MySqlPool,
}

impl MySqlAttendanceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<AttendanceRecord, DomainError> {
        Ok(AttendanceRecord {
            record_id: row.try_get("record_id").map_err(|e| column("record_id", e))?,
            employee_id: row.try_get("employee_id").map_err(|e| column("employee_id", e))?,
            date: row.try_get("date").map_err(|e| column("date", e))?,
            login_time: row.try_get("login_time").map_err(|e| column("login_time", e))?,
            work_location: row.try_get("work_location").map_err(|e| column("work_location", e))?,
            logout_time: row.try_get("logout_time").map_err(|e| column("logout_time", e))?,
        })
    }

    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<AttendanceEntry, DomainError> {
        Ok(AttendanceEntry {
            record_id: row.try_get("record_id").map_err(|e| column("record_id", e))?,
            date: row.try_get("date").map_err(|e| column("date", e))?,
            login_time: row.try_get("login_time").map_err(|e| column("login_time", e))?,
            work_location: row.try_get("work_location").map_err(|e| column("work_location", e))?,
            logout_time: row.try_get("logout_time").map_err(|e| column("logout_time", e))?,
            employee_name: row.try_get("employee_name").map_err(|e| column("employee_name", e))?,
        })
    }
}

#[async_trait]
impl AttendanceRepository for MySqlAttendanceRepository {
    async fn create(&self, record: AttendanceRecord) -> Result<AttendanceRecord, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendance_records (
                record_id, employee_id, date, login_time, work_location, logout_time
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.record_id)
        .bind(&record.employee_id)
        .bind(record.date)
        .bind(record.login_time)
        .bind(&record.work_location)
        .bind(record.logout_time)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(record),
            Err(e) if is_foreign_key_violation(&e) => Err(DomainError::not_found("Employee")),
            Err(e) => Err(query_failed("Failed to insert attendance record", e)),
        }
    }

    async fn close_session(
        &self,
        record_id: &str,
        logout_time: NaiveTime,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE attendance_records
            SET logout_time = ?
            WHERE record_id = ? AND logout_time IS NULL
            "#,
        )
        .bind(logout_time)
        .bind(record_id)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to close attendance session", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_id(&self, record_id: &str) -> Result<Option<AttendanceRecord>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT record_id, employee_id, date, login_time, work_location, logout_time
            FROM attendance_records
            WHERE record_id = ?
            LIMIT 1
            "#,
        )
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to find attendance record", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT a.record_id, a.date, a.login_time, a.work_location, a.logout_time,
                   CONCAT(e.first_name, ' ', e.last_name) AS employee_name
            FROM attendance_records a
            JOIN employees e ON e.id = a.employee_id
            WHERE a.employee_id = ?
            ORDER BY a.date DESC, a.login_time DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to list attendance", e))?;

        rows.iter().map(Self::row_to_entry).collect()
    }
}
