//! Allow-listed partial updates to an employee profile.

use serde_json::{Map, Value};

use crate::domain::entities::{Employee, EmployeeDetails};
use crate::errors::ValidationError;

macro_rules! profile_fields {
    ($($variant:ident => $field:ident),+ $(,)?) => {
        /// A column the profile update path is allowed to write
        ///
        /// `id`, `email`, `password` and `user_type` have no variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ProfileField {
            FirstName,
            LastName,
            $($variant,)+
        }

        impl ProfileField {
            pub const ALL: &'static [ProfileField] = &[
                ProfileField::FirstName,
                ProfileField::LastName,
                $(ProfileField::$variant,)+
            ];

            /// Storage column, identical to the request key
            pub fn column(&self) -> &'static str {
                match self {
                    ProfileField::FirstName => "first_name",
                    ProfileField::LastName => "last_name",
                    $(ProfileField::$variant => stringify!($field),)+
                }
            }

            fn detail_slot<'a>(&self, details: &'a mut EmployeeDetails) -> Option<&'a mut Option<String>> {
                match self {
                    ProfileField::FirstName | ProfileField::LastName => None,
                    $(ProfileField::$variant => Some(&mut details.$field),)+
                }
            }
        }
    };
}

profile_fields! {
    Gender => gender,
    Dob => dob,
    PermanentAddress => permanent_address,
    CurrentAddress => current_address,
    PanNumber => pan_number,
    AadharNumber => aadhar_number,
    ContactNumber => contactnumber,
    AlternateContactNumber => alternate_contact_number,
    AlternateContactPerson => alternate_contact_person,
    AlternateContactRelation => alternate_contact_relation,
    EmergencyNumber => emergency_number,
    AccountNumber => account_number,
    IfscCode => ifsc_code,
    AccountHolderName => account_holder_name,
    Branch => branch,
    Department => department,
    ReportingManager1 => reporting_manager1,
    ReportingManager1Mail => reporting_manager1_mail,
    ReportingManager2 => reporting_manager2,
    ReportingManager2Mail => reporting_manager2_mail,
    EmployeeRole => employee_role,
    EmploymentStatus => employment_status,
    JoinDate => join_date,
}

impl ProfileField {
    /// Look a request key up in the allow-list
    pub fn from_column(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.column() == key)
    }

    /// Columns that may never be cleared
    pub fn is_required(&self) -> bool {
        matches!(self, ProfileField::FirstName | ProfileField::LastName)
    }
}

/// A validated, non-empty set of column changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    changes: Vec<(ProfileField, Option<String>)>,
}

impl ProfileUpdate {
    /// Keys accepted in a request but silently discarded
    pub const PROTECTED_KEYS: [&'static str; 3] = ["id", "email", "password"];

    /// Build an update from a request body
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut changes = Vec::with_capacity(fields.len());

        for (key, value) in fields {
            if Self::PROTECTED_KEYS.contains(&key.as_str()) {
                continue;
            }

            let field = ProfileField::from_column(key)
                .ok_or_else(|| ValidationError::UnknownField { field: key.clone() })?;

            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ValidationError::InvalidValue { field: key.clone() })
                }
            };

            if field.is_required() && value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                return Err(ValidationError::required(key.as_str()));
            }

            changes.push((field, value));
        }

        if changes.is_empty() {
            return Err(ValidationError::NoUpdatableFields);
        }

        Ok(Self { changes })
    }

    pub fn changes(&self) -> &[(ProfileField, Option<String>)] {
        &self.changes
    }

    /// Write the changes onto an in-memory record
    pub fn apply_to(&self, employee: &mut Employee) {
        for (field, value) in &self.changes {
            match field {
                ProfileField::FirstName => employee.first_name = value.clone().unwrap_or_default(),
                ProfileField::LastName => employee.last_name = value.clone().unwrap_or_default(),
                other => {
                    if let Some(slot) = other.detail_slot(&mut employee.details) {
                        *slot = value.clone();
                    }
                }
            }
        }
    }
}
