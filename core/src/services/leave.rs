//! Leave workflow: submission and listing.

use std::sync::Arc;
use tracing::info;

use hr_shared::validation::non_blank;

use crate::domain::entities::{messages, LeaveApplication};
use crate::errors::DomainResult;
use crate::repositories::{LeaveRepository, NotificationRepository};
use crate::services::notification::NotificationService;
use crate::services::validation::{optional_date, require, require_date};

/// Leave request as received from the caller
#[derive(Debug, Clone, Default)]
pub struct LeaveSubmission {
    pub employee_id: Option<String>,
    pub leave_type: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub description: Option<String>,
}

pub struct LeaveService<L: LeaveRepository, N: NotificationRepository> {
    repository: Arc<L>,
    notifications: NotificationService<N>,
}

impl<L: LeaveRepository, N: NotificationRepository> LeaveService<L, N> {
    pub fn new(repository: Arc<L>, notifications: NotificationService<N>) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// File a new `Pending` application and notify the employee
    pub async fn submit(&self, input: LeaveSubmission) -> DomainResult<LeaveApplication> {
        let employee_id = require(input.employee_id.as_deref(), "employee_id")?;
        let leave_type = require(input.leave_type.as_deref(), "leave_type")?;
        let from_date = require_date(input.from_date.as_deref(), "from_date")?;
        let to_date = optional_date(input.to_date.as_deref(), "to_date")?;
        let description = non_blank(input.description.as_deref()).map(str::to_string);

        let application = self
            .repository
            .create(LeaveApplication::submit(
                employee_id,
                leave_type,
                from_date,
                to_date,
                description,
            ))
            .await?;

        self.notifications
            .append(employee_id, messages::leave_submitted(leave_type))
            .await;

        info!(
            employee_id = %employee_id,
            record_id = %application.record_id,
            leave_type = %leave_type,
            "Leave application submitted"
        );
        Ok(application)
    }

    pub async fn list_for_employee(&self, employee_id: &str) -> DomainResult<Vec<LeaveApplication>> {
        self.repository.list_for_employee(employee_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EmployeeDetails, LeaveStatus, NewEmployee};
    use crate::errors::{DomainError, ValidationError};
    use crate::repositories::{EmployeeRepository, InMemoryStore};

    async fn setup() -> (Arc<InMemoryStore>, LeaveService<InMemoryStore, InMemoryStore>, String) {
        let store = Arc::new(InMemoryStore::new());
        let employee = EmployeeRepository::create(
            store.as_ref(),
            NewEmployee {
                first_name: "Sana".to_string(),
                last_name: "Khan".to_string(),
                email: "sana@corp.example".to_string(),
                password_hash: "hash".to_string(),
                details: EmployeeDetails::default(),
            },
        )
        .await
        .unwrap();
        let service = LeaveService::new(store.clone(), NotificationService::new(store.clone()));
        (store, service, employee.id)
    }

    fn submission(employee_id: &str) -> LeaveSubmission {
        LeaveSubmission {
            employee_id: Some(employee_id.to_string()),
            leave_type: Some("Sick Leave".to_string()),
            from_date: Some("2024-06-10".to_string()),
            to_date: Some("".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_submit_is_pending_and_notifies() {
        let (store, service, id) = setup().await;

        let application = service.submit(submission(&id)).await.unwrap();
        assert_eq!(application.status, LeaveStatus::Pending);
        assert_eq!(application.to_date, None);

        let feed = NotificationRepository::list_for_employee(store.as_ref(), &id).await.unwrap();
        assert_eq!(feed[0].message, "Your request for Sick Leave has been submitted.");
    }

    #[tokio::test]
    async fn test_submit_validation() {
        let (_, service, id) = setup().await;

        let mut input = submission(&id);
        input.leave_type = None;
        let err = service.submit(input).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationErr(ValidationError::RequiredField { .. })));

        let mut input = submission(&id);
        input.to_date = Some("June 12".to_string());
        let err = service.submit(input).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationErr(ValidationError::InvalidDate { .. })));

        let err = service.submit(submission("SSQ-4040")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (_, service, id) = setup().await;
        service.submit(submission(&id)).await.unwrap();
        let mut second = submission(&id);
        second.leave_type = Some("Earned Leave".to_string());
        service.submit(second).await.unwrap();

        let listed = service.list_for_employee(&id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].leave_type, "Earned Leave");
    }
}
