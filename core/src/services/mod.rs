//! Business services containing domain logic and use cases.

pub mod attendance;
pub mod credential;
pub mod leave;
pub mod mail;
pub mod notification;
pub mod profile;
pub mod validation;

// Re-export commonly used types
pub use attendance::{AttendanceLoginInput, AttendanceService};
pub use credential::{
    CredentialService, CredentialServiceConfig, LoginInput, PasswordResetOutcome, RegisterInput,
};
pub use leave::{LeaveService, LeaveSubmission};
pub use mail::{Mailer, OutgoingMail};
pub use notification::NotificationService;
pub use profile::ProfileService;
