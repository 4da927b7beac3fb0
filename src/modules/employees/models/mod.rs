pub mod employee;

pub use employee::{max_salary, Employee, EmployeeRequest, SALARY_SCALE};
