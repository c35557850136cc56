//! Request and response bodies
//!
//! Request fields are optional so that a missing field reaches the service
//! layer and is reported as a validation error naming that field.

pub mod attendance;
pub mod auth;
pub mod leave;
pub mod notification;
pub mod profile;

pub use attendance::{AttendanceLoginRequest, AttendanceLoginResponse, AttendanceLogoutResponse};
pub use auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, ResetPasswordRequest,
};
pub use leave::{LeaveApplicationRequest, LeaveSubmittedResponse};
pub use notification::MarkReadResponse;
pub use profile::ProfileUpdatedResponse;
