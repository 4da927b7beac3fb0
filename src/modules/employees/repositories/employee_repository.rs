// MySQL-backed employee record store
//
// Table layout lives in schema/employees.sql. Ids come from AUTO_INCREMENT.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::employees::models::Employee;

/// Record store consumed by the employee service
pub trait EmployeeRepository: Repository<Employee, i64> {}

impl<T> EmployeeRepository for T where T: Repository<Employee, i64> {}

/// Repository for employee database operations
#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: Employee) -> Result<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, department, salary)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.department)
        .bind(employee.salary)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        tracing::debug!(employee_id = id, "Inserted employee row");

        Ok(employee.with_id(id))
    }

    async fn upsert(&self, id: i64, employee: Employee) -> Result<Employee> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, name, department, salary)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                department = VALUES(department),
                salary = VALUES(salary)
            "#,
        )
        .bind(id)
        .bind(&employee.name)
        .bind(&employee.department)
        .bind(employee.salary)
        .execute(&self.pool)
        .await?;

        Ok(employee)
    }
}

#[async_trait]
impl Repository<Employee, i64> for MySqlEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        match employee.id {
            Some(id) => self.upsert(id, employee).await,
            None => self.insert(employee).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, salary
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, salary
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
