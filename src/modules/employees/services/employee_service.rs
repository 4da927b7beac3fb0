use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::employees::models::{max_salary, Employee, EmployeeRequest, SALARY_SCALE};
use crate::modules::employees::repositories::EmployeeRepository;

/// Service for employee business logic
///
/// Holds no state besides the record store handle, so one instance is shared
/// by every worker.
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// Validate and store a new employee
    ///
    /// The store is not touched when validation fails.
    pub async fn create_employee(&self, request: EmployeeRequest) -> Result<Employee> {
        let candidate = validate_new_employee(request)?;

        let employee = self.employee_repo.save(candidate).await?;
        tracing::debug!(employee_id = ?employee.id, "Employee created");

        Ok(employee)
    }

    /// Get employee by ID
    pub async fn get_employee_by_id(&self, id: i64) -> Result<Employee> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// List every stored employee
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.employee_repo.find_all().await
    }

    /// Overwrite name, department and salary of an existing employee
    ///
    /// Field constraints from create are not re-checked here.
    pub async fn update_employee(&self, id: i64, request: EmployeeRequest) -> Result<Employee> {
        let mut employee = self
            .employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        employee.apply(request);

        let employee = self.employee_repo.save(employee).await?;
        tracing::debug!(employee_id = id, "Employee updated");

        Ok(employee)
    }

    /// Delete an existing employee
    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        if !self.employee_repo.exists_by_id(id).await? {
            return Err(employee_not_found(id));
        }

        self.employee_repo.delete_by_id(id).await?;
        tracing::debug!(employee_id = id, "Employee deleted");

        Ok(())
    }

    /// Check the record store is reachable
    pub async fn ping_store(&self) -> Result<()> {
        self.employee_repo.ping().await
    }
}

/// Check create-time constraints and build the record to store
///
/// Name must be present and non-empty. Salary must be strictly positive and
/// fit the store column exactly: at most two decimal places, at most
/// 9999999999999.99.
pub fn validate_new_employee(request: EmployeeRequest) -> Result<Employee> {
    let name = match request.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::invalid_argument("Employee name must not be empty")),
    };

    if request.salary <= Decimal::ZERO {
        return Err(AppError::invalid_argument(
            "Employee salary must be greater than 0",
        ));
    }

    if request.salary.normalize().scale() > SALARY_SCALE {
        return Err(AppError::invalid_argument(format!(
            "Employee salary cannot have more than {} decimal places",
            SALARY_SCALE
        )));
    }

    if request.salary > max_salary() {
        return Err(AppError::invalid_argument(format!(
            "Employee salary cannot exceed {}",
            max_salary()
        )));
    }

    let salary = request.salary.round_dp(SALARY_SCALE);

    Ok(Employee::new(name, request.department, salary))
}

fn employee_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Employee {} not found", id))
}
