//! Employee repository trait defining the interface for employee persistence.
//!
//! Implementations own sequential id allocation and the uniqueness of
//! `email`; services never compute ids themselves.

use async_trait::async_trait;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::value_objects::ProfileUpdate;
use crate::errors::DomainError;

/// Repository trait for Employee persistence operations
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by id
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - Employee found
    /// * `Ok(None)` - No employee with that id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new employee under the next sequential id
    ///
    /// Allocation and insert are atomic with respect to concurrent calls:
    /// two registrations never receive the same id.
    ///
    /// # Returns
    /// * `Ok(Employee)` - The stored record with its allocated id
    /// * `Err(DomainError::Conflict)` - Email already registered
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, employee: NewEmployee) -> Result<Employee, DomainError>;

    /// Replace the stored password hash
    ///
    /// Returns `false` when no employee has that id.
    async fn update_password(&self, id: &str, password_hash: &str) -> Result<bool, DomainError>;

    /// Apply a validated profile update in a single write
    ///
    /// Returns `false` when no employee has that id.
    async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> Result<bool, DomainError>;
}
