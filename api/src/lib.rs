//! HTTP boundary of the HRMS backend
//!
//! The binary in `main.rs` and the integration tests both build the
//! application through [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
