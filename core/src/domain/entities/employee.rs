//! Employee entity representing a registered person in the HRMS.

use serde::{Deserialize, Serialize};

/// `user_type` assigned to every registered employee
pub const DEFAULT_USER_TYPE: &str = "employee";

/// Optional HR attributes carried by an employee record
///
/// Every attribute is nullable; registration may supply any subset and the
/// profile update path may change them later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDetails {
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub permanent_address: Option<String>,
    pub current_address: Option<String>,
    pub pan_number: Option<String>,
    pub aadhar_number: Option<String>,
    pub contactnumber: Option<String>,
    pub alternate_contact_number: Option<String>,
    pub alternate_contact_person: Option<String>,
    pub alternate_contact_relation: Option<String>,
    pub emergency_number: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_holder_name: Option<String>,
    pub branch: Option<String>,
    pub department: Option<String>,
    pub reporting_manager1: Option<String>,
    pub reporting_manager1_mail: Option<String>,
    pub reporting_manager2: Option<String>,
    pub reporting_manager2_mail: Option<String>,
    pub employee_role: Option<String>,
    pub employment_status: Option<String>,
    pub join_date: Option<String>,
}

/// Employee record as persisted, including the password hash
///
/// Deliberately not `Serialize`: the only outward representation is
/// [`EmployeeProfile`], which has no password field at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Sequential identifier, `SSQ-<n>`
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all employees
    pub email: String,
    /// bcrypt hash of the current password
    pub password_hash: String,
    pub details: EmployeeDetails,
    pub user_type: String,
}

impl Employee {
    /// Display name used in attendance listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Consume the record into its outward view
    pub fn into_profile(self) -> EmployeeProfile {
        EmployeeProfile {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            details: self.details,
            user_type: self.user_type,
        }
    }
}

/// Employee record without credentials, safe to return to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(flatten)]
    pub details: EmployeeDetails,
    pub user_type: String,
}

/// A validated registration ready for persistence
///
/// The repository assigns the sequential id when it stores this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub details: EmployeeDetails,
}

impl NewEmployee {
    /// Materialize the record under an allocated id
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            details: self.details,
            user_type: DEFAULT_USER_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        NewEmployee {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@corp.example".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            details: EmployeeDetails {
                department: Some("Finance".to_string()),
                ..Default::default()
            },
        }
        .into_employee("SSQ-1001".to_string())
    }

    #[test]
    fn test_new_employee_defaults_user_type() {
        let employee = sample();
        assert_eq!(employee.id, "SSQ-1001");
        assert_eq!(employee.user_type, DEFAULT_USER_TYPE);
        assert_eq!(employee.full_name(), "Asha Rao");
    }

    #[test]
    fn test_profile_serialization_has_no_password() {
        let json = serde_json::to_value(sample().into_profile()).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(object["department"], "Finance");
        assert!(object["branch"].is_null());
        assert_eq!(object["user_type"], "employee");
    }

    #[test]
    fn test_details_deserialize_from_partial_map() {
        let details: EmployeeDetails =
            serde_json::from_value(serde_json::json!({ "branch": "Pune" })).unwrap();
        assert_eq!(details.branch.as_deref(), Some("Pune"));
        assert!(details.gender.is_none());
    }
}
