//! Attendance sessions: one record per check-in, closed once by check-out.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single login/logout work session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Opaque unique key
    pub record_id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub login_time: NaiveTime,
    pub work_location: String,
    /// Set once, only while still `None`
    pub logout_time: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Open a new session starting at `login_time`
    pub fn open(
        employee_id: impl Into<String>,
        date: NaiveDate,
        work_location: impl Into<String>,
        login_time: NaiveTime,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            date,
            login_time,
            work_location: work_location.into(),
            logout_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.logout_time.is_none()
    }

    /// Close the session; returns false if it was already closed
    pub fn close(&mut self, logout_time: NaiveTime) -> bool {
        if self.logout_time.is_some() {
            return false;
        }
        self.logout_time = Some(logout_time);
        true
    }
}

/// A freshly opened session echoed back with the caller-supplied display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSession {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// Display-only, never persisted
    pub employee_name: String,
}

/// Listing row: a session joined to the owning employee's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub record_id: String,
    pub date: NaiveDate,
    pub login_time: NaiveTime,
    pub work_location: String,
    pub logout_time: Option<NaiveTime>,
    pub employee_name: String,
}

impl AttendanceEntry {
    pub fn from_record(record: AttendanceRecord, employee_name: String) -> Self {
        Self {
            record_id: record.record_id,
            date: record.date,
            login_time: record.login_time,
            work_location: record.work_location,
            logout_time: record.logout_time,
            employee_name,
        }
    }
}

/// Server-local wall clock truncated to whole seconds (`HH:MM:SS`)
pub fn wall_clock_time() -> NaiveTime {
    let now = Local::now().time();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_session_closes_once() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut record = AttendanceRecord::open("SSQ-1001", date, "Office", nine_am());
        assert!(record.is_open());

        let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert!(record.close(five_pm));
        assert!(!record.close(NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
        assert_eq!(record.logout_time, Some(five_pm));
    }

    #[test]
    fn test_times_serialize_as_hh_mm_ss() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let session = AttendanceSession {
            record: AttendanceRecord::open("SSQ-1001", date, "Remote", nine_am()),
            employee_name: "Asha Rao".to_string(),
        };
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["login_time"], "09:00:00");
        assert_eq!(json["date"], "2024-03-04");
        assert!(json["logout_time"].is_null());
        assert_eq!(json["employee_name"], "Asha Rao");
    }

    #[test]
    fn test_wall_clock_has_no_fraction() {
        assert_eq!(wall_clock_time().nanosecond(), 0);
    }
}
