//! Attendance tracker: check-in, single check-out, listing.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{
    wall_clock_time, AttendanceEntry, AttendanceRecord, AttendanceSession,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AttendanceRepository;
use crate::services::validation::{require, require_date};

/// Check-in request as received from the caller
#[derive(Debug, Clone, Default)]
pub struct AttendanceLoginInput {
    pub employee_id: Option<String>,
    pub date: Option<String>,
    pub work_location: Option<String>,
    pub employee_name: Option<String>,
}

pub struct AttendanceService<A: AttendanceRepository> {
    repository: Arc<A>,
}

impl<A: AttendanceRepository> AttendanceService<A> {
    pub fn new(repository: Arc<A>) -> Self {
        Self { repository }
    }

    /// Open a session stamped with the current wall-clock time
    ///
    /// An employee may hold several open sessions on the same date.
    pub async fn login(&self, input: AttendanceLoginInput) -> DomainResult<AttendanceSession> {
        let employee_id = require(input.employee_id.as_deref(), "employee_id")?;
        let date = require_date(input.date.as_deref(), "date")?;
        let work_location = require(input.work_location.as_deref(), "work_location")?;
        let employee_name = require(input.employee_name.as_deref(), "employee_name")?;

        let record = self
            .repository
            .create(AttendanceRecord::open(
                employee_id,
                date,
                work_location,
                wall_clock_time(),
            ))
            .await?;

        info!(
            employee_id = %employee_id,
            record_id = %record.record_id,
            "Attendance login recorded"
        );
        Ok(AttendanceSession {
            record,
            employee_name: employee_name.to_string(),
        })
    }

    /// Close a session and return its logout time
    ///
    /// A missing record and an already closed one are reported the same way.
    pub async fn logout(&self, record_id: &str) -> DomainResult<chrono::NaiveTime> {
        let logout_time = wall_clock_time();
        if !self.repository.close_session(record_id, logout_time).await? {
            return Err(DomainError::not_found("Attendance record"));
        }
        info!(record_id = %record_id, "Attendance logout recorded");
        Ok(logout_time)
    }

    pub async fn list_for_employee(&self, employee_id: &str) -> DomainResult<Vec<AttendanceEntry>> {
        self.repository.list_for_employee(employee_id).await
    }
}
