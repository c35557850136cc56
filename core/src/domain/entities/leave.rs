//! Leave applications and their status field.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of a leave application
///
/// New applications are always `Pending`. Other values are set outside this
/// service; unrecognised values read back from storage are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Other(String),
}

impl LeaveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
            LeaveStatus::Other(value) => value,
        }
    }
}

impl Default for LeaveStatus {
    fn default() -> Self {
        LeaveStatus::Pending
    }
}

impl From<String> for LeaveStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => LeaveStatus::Pending,
            "Approved" => LeaveStatus::Approved,
            "Rejected" => LeaveStatus::Rejected,
            "Cancelled" => LeaveStatus::Cancelled,
            _ => LeaveStatus::Other(value),
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-off request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub record_id: String,
    pub employee_id: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
}

impl LeaveApplication {
    /// A new `Pending` application stamped with the current time
    pub fn submit(
        employee_id: impl Into<String>,
        leave_type: impl Into<String>,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
        description: Option<String>,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            leave_type: leave_type.into(),
            from_date,
            to_date,
            description,
            status: LeaveStatus::Pending,
            submitted_at: Utc::now(),
        }
    }
}
