use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::employees::models::Employee;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// Process-local employee store
///
/// Ids start at 1 and are never reused. Iteration order is id order.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl Repository<Employee, i64> for InMemoryEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        let mut table = self.table.write().await;

        let id = match employee.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        let stored = employee.with_id(id);
        table.rows.insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
