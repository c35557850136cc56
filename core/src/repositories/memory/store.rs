use async_trait::async_trait;
use chrono::NaiveTime;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{
    AttendanceEntry, AttendanceRecord, Employee, LeaveApplication, NewEmployee, Notification,
};
use crate::domain::value_objects::{employee_id, ProfileUpdate};
use crate::errors::DomainError;
use crate::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

#[derive(Default)]
struct State {
    employees: HashMap<String, Employee>,
    attendance: Vec<AttendanceRecord>,
    notifications: Vec<Notification>,
    leaves: Vec<LeaveApplication>,
}

/// Shared in-memory backing for all repositories
///
/// Cloning yields another handle onto the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
    fail_notifications: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every notification append fail with a storage error
    pub fn set_fail_notifications(&self, fail: bool) {
        self.fail_notifications.store(fail, Ordering::SeqCst);
    }

    pub async fn employee_count(&self) -> usize {
        self.state.read().await.employees.len()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self.state.read().await.employees.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let state = self.state.read().await;
        Ok(state.employees.values().find(|e| e.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.employees.values().any(|e| e.email == email))
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, DomainError> {
        let mut state = self.state.write().await;

        if state.employees.values().any(|e| e.email == employee.email) {
            return Err(DomainError::Conflict {
                resource: format!("Employee with email {}", employee.email),
            });
        }

        let id = employee_id::next_after(state.employees.keys().map(String::as_str))?;
        let employee = employee.into_employee(id.clone());
        state.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.employees.get_mut(id) {
            Some(employee) => {
                employee.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.employees.get_mut(id) {
            Some(employee) => {
                update.apply_to(employee);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryStore {
    async fn create(&self, record: AttendanceRecord) -> Result<AttendanceRecord, DomainError> {
        let mut state = self.state.write().await;
        if !state.employees.contains_key(&record.employee_id) {
            return Err(DomainError::not_found("Employee"));
        }
        state.attendance.push(record.clone());
        Ok(record)
    }

    async fn close_session(
        &self,
        record_id: &str,
        logout_time: NaiveTime,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        Ok(state
            .attendance
            .iter_mut()
            .find(|r| r.record_id == record_id)
            .map(|r| r.close(logout_time))
            .unwrap_or(false))
    }

    async fn find_by_id(&self, record_id: &str) -> Result<Option<AttendanceRecord>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .attendance
            .iter()
            .find(|r| r.record_id == record_id)
            .cloned())
    }

    async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceEntry>, DomainError> {
        let state = self.state.read().await;
        let name = match state.employees.get(employee_id) {
            Some(employee) => employee.full_name(),
            None => return Ok(Vec::new()),
        };

        let mut records: Vec<&AttendanceRecord> = state
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.login_time.cmp(&a.login_time)));

        Ok(records
            .into_iter()
            .map(|r| AttendanceEntry::from_record(r.clone(), name.clone()))
            .collect())
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn append(&self, notification: Notification) -> Result<(), DomainError> {
        if self.fail_notifications.load(Ordering::SeqCst) {
            return Err(DomainError::storage("notification store unavailable"));
        }
        self.state.write().await.notifications.push(notification);
        Ok(())
    }

    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Notification>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .notifications
            .iter()
            .rev()
            .filter(|n| n.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn mark_all_read(&self, employee_id: &str) -> Result<u64, DomainError> {
        let mut state = self.state.write().await;
        let mut changed = 0;
        for notification in state
            .notifications
            .iter_mut()
            .filter(|n| n.employee_id == employee_id && !n.is_read)
        {
            notification.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }
}

#[async_trait]
impl LeaveRepository for InMemoryStore {
    async fn create(&self, application: LeaveApplication) -> Result<LeaveApplication, DomainError> {
        let mut state = self.state.write().await;
        if !state.employees.contains_key(&application.employee_id) {
            return Err(DomainError::not_found("Employee"));
        }
        state.leaves.push(application.clone());
        Ok(application)
    }

    async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .leaves
            .iter()
            .rev()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
