pub mod employee_repository;
pub mod in_memory;

pub use employee_repository::{EmployeeRepository, MySqlEmployeeRepository};
pub use in_memory::InMemoryEmployeeRepository;
