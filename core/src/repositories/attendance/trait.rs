//! Attendance repository trait.

use async_trait::async_trait;
use chrono::NaiveTime;

use crate::domain::entities::{AttendanceEntry, AttendanceRecord};
use crate::errors::DomainError;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Store a freshly opened session
    ///
    /// Fails with `NotFound` when the employee does not exist.
    async fn create(&self, record: AttendanceRecord) -> Result<AttendanceRecord, DomainError>;

    /// Set `logout_time` on a session that has none yet
    ///
    /// The check and the write happen as one conditional update, so of any
    /// number of concurrent calls on the same record exactly one returns
    /// `true`. Unknown records and closed records both return `false`.
    async fn close_session(
        &self,
        record_id: &str,
        logout_time: NaiveTime,
    ) -> Result<bool, DomainError>;

    async fn find_by_id(&self, record_id: &str) -> Result<Option<AttendanceRecord>, DomainError>;

    /// All sessions of an employee, newest date first, with the employee's full name
    async fn list_for_employee(&self, employee_id: &str)
        -> Result<Vec<AttendanceEntry>, DomainError>;
}
