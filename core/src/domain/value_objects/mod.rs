//! Value objects representing immutable domain concepts.

pub mod authenticated_user;
pub mod employee_id;
pub mod profile_update;

// Re-export commonly used types
pub use authenticated_user::{AdminIdentity, AuthenticatedUser, UserType};
pub use employee_id::{EMPLOYEE_ID_BASE, EMPLOYEE_ID_PREFIX};
pub use profile_update::{ProfileField, ProfileUpdate};
