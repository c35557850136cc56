//! MySQL implementation of the EmployeeRepository trait.
//!
//! Ids are allocated by reading the current maximum `SSQ-` suffix and
//! inserting the next one. The primary key makes a racing allocation fail,
//! in which case the read and insert are retried.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::{debug, warn};

use hr_core::domain::entities::{Employee, EmployeeDetails, NewEmployee};
use hr_core::domain::value_objects::{employee_id, ProfileUpdate};
use hr_core::errors::DomainError;
use hr_core::repositories::EmployeeRepository;

use super::{column, is_unique_violation, query_failed, violated_key};

/// Attempts at allocating an id before giving up
const MAX_ID_ATTEMPTS: usize = 5;

const EMPLOYEE_COLUMNS: &str = r#"
    id, first_name, last_name, email, password,
    gender, dob, permanent_address, current_address, pan_number, aadhar_number,
    contactnumber, alternate_contact_number, alternate_contact_person,
    alternate_contact_relation, emergency_number, account_number, ifsc_code,
    account_holder_name, branch, department, reporting_manager1,
    reporting_manager1_mail, reporting_manager2, reporting_manager2_mail,
    employee_role, employment_status, join_date, user_type
"#;

/// MySQL implementation of EmployeeRepository
pub struct MySqlEmployeeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Employee entity
    fn row_to_employee(row: &sqlx::mysql::MySqlRow) -> Result<Employee, DomainError> {
        let text = |name: &str| -> Result<Option<String>, DomainError> {
            row.try_get::<Option<String>, _>(name).map_err(|e| column(name, e))
        };

        Ok(Employee {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            first_name: row.try_get("first_name").map_err(|e| column("first_name", e))?,
            last_name: row.try_get("last_name").map_err(|e| column("last_name", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row.try_get("password").map_err(|e| column("password", e))?,
            details: EmployeeDetails {
                gender: text("gender")?,
                dob: text("dob")?,
                permanent_address: text("permanent_address")?,
                current_address: text("current_address")?,
                pan_number: text("pan_number")?,
                aadhar_number: text("aadhar_number")?,
                contactnumber: text("contactnumber")?,
                alternate_contact_number: text("alternate_contact_number")?,
                alternate_contact_person: text("alternate_contact_person")?,
                alternate_contact_relation: text("alternate_contact_relation")?,
                emergency_number: text("emergency_number")?,
                account_number: text("account_number")?,
                ifsc_code: text("ifsc_code")?,
                account_holder_name: text("account_holder_name")?,
                branch: text("branch")?,
                department: text("department")?,
                reporting_manager1: text("reporting_manager1")?,
                reporting_manager1_mail: text("reporting_manager1_mail")?,
                reporting_manager2: text("reporting_manager2")?,
                reporting_manager2_mail: text("reporting_manager2_mail")?,
                employee_role: text("employee_role")?,
                employment_status: text("employment_status")?,
                join_date: text("join_date")?,
            },
            user_type: row.try_get("user_type").map_err(|e| column("user_type", e))?,
        })
    }

    async fn find_one(&self, filter: &str, value: &str) -> Result<Option<Employee>, DomainError> {
        let query = format!(
            "SELECT {} FROM employees WHERE {} = ? LIMIT 1",
            EMPLOYEE_COLUMNS, filter
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find employee", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to check employee existence", e))?;
        let found: i64 = row.try_get("found").map_err(|e| column("found", e))?;
        Ok(found == 1)
    }

    async fn next_id(&self) -> Result<String, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT MAX(CAST(SUBSTRING(id, 5) AS UNSIGNED)) AS max_seq
            FROM employees
            WHERE id LIKE 'SSQ-%'
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to read employee id sequence", e))?;

        let max_seq: Option<u64> = row.try_get("max_seq").map_err(|e| column("max_seq", e))?;
        Ok(employee_id::format(employee_id::next_sequence(max_seq)?))
    }

    async fn insert(&self, id: &str, employee: &NewEmployee) -> Result<(), sqlx::Error> {
        let d = &employee.details;
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, first_name, last_name, email, password,
                gender, dob, permanent_address, current_address, pan_number, aadhar_number,
                contactnumber, alternate_contact_number, alternate_contact_person,
                alternate_contact_relation, emergency_number, account_number, ifsc_code,
                account_holder_name, branch, department, reporting_manager1,
                reporting_manager1_mail, reporting_manager2, reporting_manager2_mail,
                employee_role, employment_status, join_date, user_type
            ) VALUES (
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
            )
            "#,
        )
        .bind(id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.password_hash)
        .bind(&d.gender)
        .bind(&d.dob)
        .bind(&d.permanent_address)
        .bind(&d.current_address)
        .bind(&d.pan_number)
        .bind(&d.aadhar_number)
        .bind(&d.contactnumber)
        .bind(&d.alternate_contact_number)
        .bind(&d.alternate_contact_person)
        .bind(&d.alternate_contact_relation)
        .bind(&d.emergency_number)
        .bind(&d.account_number)
        .bind(&d.ifsc_code)
        .bind(&d.account_holder_name)
        .bind(&d.branch)
        .bind(&d.department)
        .bind(&d.reporting_manager1)
        .bind(&d.reporting_manager1_mail)
        .bind(&d.reporting_manager2)
        .bind(&d.reporting_manager2_mail)
        .bind(&d.employee_role)
        .bind(&d.employment_status)
        .bind(&d.join_date)
        .bind(hr_core::domain::entities::DEFAULT_USER_TYPE)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        self.find_one("id", id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        self.find_one("email", email).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to check email existence", e))?;
        let found: i64 = row.try_get("found").map_err(|e| column("found", e))?;
        Ok(found == 1)
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, DomainError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.next_id().await?;

            match self.insert(&id, &employee).await {
                Ok(()) => {
                    debug!(employee_id = %id, attempt, "Employee row inserted");
                    return Ok(employee.into_employee(id));
                }
                Err(e) if is_unique_violation(&e) => {
                    let key = violated_key(&e).unwrap_or_default();
                    if key.contains("email") {
                        return Err(DomainError::Conflict {
                            resource: format!("Employee with email {}", employee.email),
                        });
                    }
                    warn!(employee_id = %id, attempt, "Employee id taken concurrently, retrying");
                }
                Err(e) => return Err(query_failed("Failed to insert employee", e)),
            }
        }

        Err(DomainError::storage(format!(
            "Could not allocate an employee id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE employees SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update password", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }

    async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> Result<bool, DomainError> {
        // column names come from the compile-time allow-list only
        let assignments = update
            .changes()
            .iter()
            .map(|(field, _)| format!("{} = ?", field.column()))
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!("UPDATE employees SET {} WHERE id = ?", assignments);

        let mut query = sqlx::query(&statement);
        for (_, value) in update.changes() {
            query = query.bind(value.as_deref());
        }

        let result = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update profile", e))?;

        // MySQL reports changed rows, so an update to identical values affects none
        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }
}
