use hr_core::EmployeeProfile;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub user: EmployeeProfile,
}
