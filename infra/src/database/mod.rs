//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Idempotent schema creation at startup
//! - Repository implementations for the four relations

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlAttendanceRepository, MySqlEmployeeRepository, MySqlLeaveRepository,
    MySqlNotificationRepository,
};
pub use schema::ensure_schema;
