use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Decimal places kept by the salary column, DECIMAL(15, 2)
pub const SALARY_SCALE: u32 = 2;

/// Largest salary the salary column holds
pub fn max_salary() -> Decimal {
    Decimal::new(999_999_999_999_999, SALARY_SCALE)
}

/// Stored employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Assigned by the record store on first save
    pub id: Option<i64>,
    pub name: String,
    pub department: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

impl Employee {
    /// Build a record that has not been stored yet
    pub fn new(name: impl Into<String>, department: Option<String>, salary: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            department,
            salary,
        }
    }

    /// Same record carrying a store-assigned id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy the mutable fields of `request` onto this record, keeping the id
    pub fn apply(&mut self, request: EmployeeRequest) {
        self.name = request.name.unwrap_or_default();
        self.department = request.department;
        self.salary = request.salary;
    }
}

/// Payload for create and update
///
/// `name` is optional here so that a missing or null name reaches validation
/// instead of failing deserialization. Any `id` sent by a client is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub salary: Decimal,
}

impl EmployeeRequest {
    pub fn new(name: Option<&str>, department: Option<&str>, salary: Decimal) -> Self {
        Self {
            name: name.map(str::to_string),
            department: department.map(str::to_string),
            salary,
        }
    }
}
