use hr_core::{LeaveApplication, LeaveSubmission};
use serde::{Deserialize, Serialize};

/// Body of `POST /leave-application`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveApplicationRequest {
    pub employee_id: Option<String>,
    pub leave_type: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub description: Option<String>,
}

impl From<LeaveApplicationRequest> for LeaveSubmission {
    fn from(request: LeaveApplicationRequest) -> Self {
        LeaveSubmission {
            employee_id: request.employee_id,
            leave_type: request.leave_type,
            from_date: request.from_date,
            to_date: request.to_date,
            description: request.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaveSubmittedResponse {
    pub message: String,
    pub record: LeaveApplication,
}

impl From<LeaveApplication> for LeaveSubmittedResponse {
    fn from(record: LeaveApplication) -> Self {
        Self {
            message: format!("{} application submitted successfully!", record.leave_type),
            record,
        }
    }
}
