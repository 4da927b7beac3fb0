// Employees module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Employee, EmployeeRequest};
pub use repositories::{EmployeeRepository, InMemoryEmployeeRepository, MySqlEmployeeRepository};
pub use services::EmployeeService;
