//! MySQL repository integration tests

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use hr_core::domain::entities::{
    AttendanceRecord, EmployeeDetails, LeaveApplication, NewEmployee, Notification,
};
use hr_core::domain::value_objects::ProfileUpdate;
use hr_core::errors::DomainError;
use hr_core::repositories::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};

use crate::database::{
    MySqlAttendanceRepository, MySqlEmployeeRepository, MySqlLeaveRepository,
    MySqlNotificationRepository,
};

use super::{test_pool, unique_email};

fn new_employee(email: String) -> NewEmployee {
    NewEmployee {
        first_name: "Integration".to_string(),
        last_name: "Tester".to_string(),
        email,
        password_hash: "$2b$04$placeholder".to_string(),
        details: EmployeeDetails::default(),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_employee_ids_increase() {
    let pool = test_pool().await;
    let repo = MySqlEmployeeRepository::new(pool.get_pool().clone());

    let first = repo.create(new_employee(unique_email("seq"))).await.unwrap();
    let second = repo.create(new_employee(unique_email("seq"))).await.unwrap();

    let a: u32 = first.id.trim_start_matches("SSQ-").parse().unwrap();
    let b: u32 = second.id.trim_start_matches("SSQ-").parse().unwrap();
    assert!(a > 1000);
    assert!(b > a);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_registrations() {
    let pool = test_pool().await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = MySqlEmployeeRepository::new(pool.get_pool().clone());
            tokio::spawn(async move { repo.create(new_employee(unique_email("race"))).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_email_conflicts() {
    let pool = test_pool().await;
    let repo = MySqlEmployeeRepository::new(pool.get_pool().clone());
    let email = unique_email("dup");

    repo.create(new_employee(email.clone())).await.unwrap();
    let err = repo.create(new_employee(email)).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_email_lookup_is_case_exact() {
    let pool = test_pool().await;
    let repo = MySqlEmployeeRepository::new(pool.get_pool().clone());
    let email = unique_email("Case");
    let lower = email.to_lowercase();

    let upper = repo.create(new_employee(email.clone())).await.unwrap();
    assert!(!repo.exists_by_email(&lower).await.unwrap());
    assert!(repo.find_by_email(&lower).await.unwrap().is_none());

    let other = repo.create(new_employee(lower.clone())).await.unwrap();
    assert_ne!(upper.id, other.id);
    assert_eq!(repo.find_by_email(&email).await.unwrap().unwrap().id, upper.id);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_profile_update_round_trip() {
    let pool = test_pool().await;
    let repo = MySqlEmployeeRepository::new(pool.get_pool().clone());
    let employee = repo.create(new_employee(unique_email("profile"))).await.unwrap();

    let fields = json!({ "department": "Sales", "branch": null });
    let update = ProfileUpdate::from_fields(fields.as_object().unwrap()).unwrap();

    assert!(repo.update_profile(&employee.id, &update).await.unwrap());
    // identical values leave no changed rows but the employee still exists
    assert!(repo.update_profile(&employee.id, &update).await.unwrap());
    assert!(!repo.update_profile("SSQ-0", &update).await.unwrap());

    let stored = repo.find_by_id(&employee.id).await.unwrap().unwrap();
    assert_eq!(stored.details.department.as_deref(), Some("Sales"));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_attendance_close_once() {
    let pool = test_pool().await;
    let employees = MySqlEmployeeRepository::new(pool.get_pool().clone());
    let attendance = MySqlAttendanceRepository::new(pool.get_pool().clone());
    let employee = employees.create(new_employee(unique_email("att"))).await.unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

    let record = attendance
        .create(AttendanceRecord::open(&employee.id, date, "Office", nine))
        .await
        .unwrap();

    assert!(attendance.close_session(&record.record_id, five).await.unwrap());
    assert!(!attendance.close_session(&record.record_id, five).await.unwrap());

    let entries = attendance.list_for_employee(&employee.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].employee_name, "Integration Tester");
    assert_eq!(entries[0].logout_time, Some(five));

    let err = attendance
        .create(AttendanceRecord::open("SSQ-0", date, "Office", nine))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_notifications_and_leave() {
    let pool = test_pool().await;
    let employees = MySqlEmployeeRepository::new(pool.get_pool().clone());
    let notifications = MySqlNotificationRepository::new(pool.get_pool().clone());
    let leaves = MySqlLeaveRepository::new(pool.get_pool().clone());
    let employee = employees.create(new_employee(unique_email("feed"))).await.unwrap();

    for i in 0..3 {
        notifications
            .append(Notification::new(&employee.id, format!("message {i}")))
            .await
            .unwrap();
    }
    let listed = notifications.list_for_employee(&employee.id).await.unwrap();
    assert_eq!(listed[0].message, "message 2");
    assert_eq!(notifications.mark_all_read(&employee.id).await.unwrap(), 3);
    assert_eq!(notifications.mark_all_read(&employee.id).await.unwrap(), 0);

    let from = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
    leaves
        .create(LeaveApplication::submit(&employee.id, "Casual Leave", from, None, None))
        .await
        .unwrap();
    let listed = leaves.list_for_employee(&employee.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status.as_str(), "Pending");
}
