//! Type definitions shared by the HTTP boundary
//!
//! - `response` - Error envelope, plain message bodies and health checks

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus, MessageResponse, ServiceHealth};
