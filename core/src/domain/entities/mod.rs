//! Domain entities representing core business objects.

pub mod attendance;
pub mod employee;
pub mod leave;
pub mod notification;

// Re-export commonly used types
pub use attendance::{wall_clock_time, AttendanceEntry, AttendanceRecord, AttendanceSession};
pub use employee::{
    Employee, EmployeeDetails, EmployeeProfile, NewEmployee, DEFAULT_USER_TYPE,
};
pub use leave::{LeaveApplication, LeaveStatus};
pub use notification::{messages, Notification};
