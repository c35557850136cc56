pub mod attendance;
pub mod employee;
pub mod leave;
pub mod memory;
pub mod notification;

pub use attendance::AttendanceRepository;
pub use employee::EmployeeRepository;
pub use leave::LeaveRepository;
pub use memory::InMemoryStore;
pub use notification::NotificationRepository;
