//! # HRMS Core
//!
//! Core business logic and domain layer for the HRMS backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AttendanceEntry, AttendanceRecord, AttendanceSession, Employee, EmployeeDetails,
    EmployeeProfile, LeaveApplication, LeaveStatus, NewEmployee, Notification,
};
pub use domain::value_objects::{AdminIdentity, AuthenticatedUser, ProfileField, ProfileUpdate};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{
    AttendanceRepository, EmployeeRepository, InMemoryStore, LeaveRepository,
    NotificationRepository,
};
pub use services::{
    AttendanceLoginInput, AttendanceService, CredentialService, CredentialServiceConfig,
    LeaveService, LeaveSubmission, LoginInput, Mailer, NotificationService, OutgoingMail,
    PasswordResetOutcome, ProfileService, RegisterInput,
};
