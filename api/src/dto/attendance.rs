use chrono::NaiveTime;
use hr_core::{AttendanceLoginInput, AttendanceSession};
use serde::{Deserialize, Serialize};

/// Body of `POST /attendance/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceLoginRequest {
    pub employee_id: Option<String>,
    pub date: Option<String>,
    pub work_location: Option<String>,
    pub employee_name: Option<String>,
}

impl From<AttendanceLoginRequest> for AttendanceLoginInput {
    fn from(request: AttendanceLoginRequest) -> Self {
        AttendanceLoginInput {
            employee_id: request.employee_id,
            date: request.date,
            work_location: request.work_location,
            employee_name: request.employee_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttendanceLoginResponse {
    pub message: String,
    pub record: AttendanceSession,
}

#[derive(Debug, Serialize)]
pub struct AttendanceLogoutResponse {
    pub message: String,
    pub logout_time: NaiveTime,
}
