//! MySQL repository implementations.

mod attendance_repository_impl;
mod employee_repository_impl;
mod leave_repository_impl;
mod notification_repository_impl;

pub use attendance_repository_impl::MySqlAttendanceRepository;
pub use employee_repository_impl::MySqlEmployeeRepository;
pub use leave_repository_impl::MySqlLeaveRepository;
pub use notification_repository_impl::MySqlNotificationRepository;

use hr_core::errors::DomainError;

/// Wrap a query failure with the operation that issued it
pub(crate) fn query_failed(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::storage(format!("{}: {}", context, e))
}

/// Wrap a column decode failure
pub(crate) fn column(name: &str, e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to get {}: {}", name, e))
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// Name of the index a MySQL duplicate-key error refers to, if any
pub(crate) fn violated_key(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) => db
            .message()
            .rsplit("for key ")
            .next()
            .map(|key| key.trim_matches(|c| c == '\'' || c == '`').to_string()),
        _ => None,
    }
}
