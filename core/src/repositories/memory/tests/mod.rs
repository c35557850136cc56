//! Unit tests for the in-memory store

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

use crate::domain::entities::{
    AttendanceRecord, EmployeeDetails, LeaveApplication, NewEmployee, Notification,
};
use crate::errors::DomainError;
use crate::repositories::{
    AttendanceRepository, EmployeeRepository, InMemoryStore, LeaveRepository,
    NotificationRepository,
};

fn new_employee(email: &str) -> NewEmployee {
    NewEmployee {
        first_name: "Meera".to_string(),
        last_name: "Iyer".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        details: EmployeeDetails::default(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn at(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

#[tokio::test]
async fn test_ids_are_sequential() {
    let store = InMemoryStore::new();

    let first = EmployeeRepository::create(&store, new_employee("a@corp.example")).await.unwrap();
    let second = EmployeeRepository::create(&store, new_employee("b@corp.example")).await.unwrap();

    assert_eq!(first.id, "SSQ-1001");
    assert_eq!(second.id, "SSQ-1002");
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let store = InMemoryStore::new();
    EmployeeRepository::create(&store, new_employee("a@corp.example")).await.unwrap();

    let err = EmployeeRepository::create(&store, new_employee("a@corp.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
    assert_eq!(store.employee_count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_get_distinct_ids() {
    let store = Arc::new(InMemoryStore::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                EmployeeRepository::create(store.as_ref(), new_employee(&format!("e{i}@corp.example")))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 20);
    assert!(ids.contains(&"SSQ-1001".to_string()));
    assert!(ids.contains(&"SSQ-1020".to_string()));
}

#[tokio::test]
async fn test_close_session_only_once() {
    let store = InMemoryStore::new();
    let employee = EmployeeRepository::create(&store, new_employee("a@corp.example")).await.unwrap();
    let record = AttendanceRepository::create(
        &store,
        AttendanceRecord::open(&employee.id, day(1), "Office", at(9)),
    )
    .await
    .unwrap();

    assert!(store.close_session(&record.record_id, at(17)).await.unwrap());
    assert!(!store.close_session(&record.record_id, at(18)).await.unwrap());
    assert!(!store.close_session("missing", at(18)).await.unwrap());

    let stored = AttendanceRepository::find_by_id(&store, &record.record_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.logout_time, Some(at(17)));
}

#[tokio::test]
async fn test_attendance_requires_employee() {
    let store = InMemoryStore::new();
    let err = AttendanceRepository::create(
        &store,
        AttendanceRecord::open("SSQ-4040", day(1), "Remote", at(9)),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_attendance_listing_is_newest_first_with_name() {
    let store = InMemoryStore::new();
    let employee = EmployeeRepository::create(&store, new_employee("a@corp.example")).await.unwrap();
    for d in [2, 5, 3] {
        AttendanceRepository::create(&store, AttendanceRecord::open(&employee.id, day(d), "Office", at(9)))
            .await
            .unwrap();
    }

    let entries = AttendanceRepository::list_for_employee(&store, &employee.id).await.unwrap();
    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();

    assert_eq!(dates, vec![day(5), day(3), day(2)]);
    assert!(entries.iter().all(|e| e.employee_name == "Meera Iyer"));
}

#[tokio::test]
async fn test_mark_all_read_counts_only_unread() {
    let store = InMemoryStore::new();
    for i in 0..5 {
        store.append(Notification::new("SSQ-1001", format!("n{i}"))).await.unwrap();
    }
    store.append(Notification::new("SSQ-1002", "other")).await.unwrap();

    assert_eq!(store.mark_all_read("SSQ-1001").await.unwrap(), 5);
    assert_eq!(store.mark_all_read("SSQ-1001").await.unwrap(), 0);

    let listed = NotificationRepository::list_for_employee(&store, "SSQ-1001").await.unwrap();
    assert_eq!(listed.first().unwrap().message, "n4");
    assert!(listed.iter().all(|n| n.is_read));

    let other = NotificationRepository::list_for_employee(&store, "SSQ-1002").await.unwrap();
    assert!(!other[0].is_read);
}

#[tokio::test]
async fn test_notification_failure_switch() {
    let store = InMemoryStore::new();
    store.set_fail_notifications(true);
    assert!(store.append(Notification::new("SSQ-1001", "x")).await.is_err());
}

#[tokio::test]
async fn test_leave_listing() {
    let store = InMemoryStore::new();
    let employee = EmployeeRepository::create(&store, new_employee("a@corp.example")).await.unwrap();

    LeaveRepository::create(&store, LeaveApplication::submit(&employee.id, "Sick Leave", day(1), None, None))
        .await
        .unwrap();
    LeaveRepository::create(&store, LeaveApplication::submit(&employee.id, "Casual Leave", day(9), Some(day(10)), None))
        .await
        .unwrap();

    let listed = LeaveRepository::list_for_employee(&store, &employee.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].leave_type, "Casual Leave");

    let err = LeaveRepository::create(&store, LeaveApplication::submit("SSQ-9", "Sick Leave", day(1), None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
