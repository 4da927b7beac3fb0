//! Employee Management Service Library
//!
//! Employee records (id, name, department, salary) with create-time
//! validation in front of a pluggable record store.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::employees;
pub use modules::employees::{Employee, EmployeeRequest, EmployeeService};
