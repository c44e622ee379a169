//! Employee collection

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::employee::Employee,
};

/// In-memory employee collection. No delete operation exists; employees
/// live for the process lifetime once added.
#[derive(Clone, Default)]
pub struct EmployeesStore {
    inner: Arc<RwLock<Vec<Employee>>>,
}

impl EmployeesStore {
    /// All employees, most recent first
    pub async fn list(&self) -> Vec<Employee> {
        self.inner.read().await.clone()
    }

    /// Get an employee by id
    pub async fn get(&self, id: &str) -> AppResult<Employee> {
        self.inner
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Prepend a new employee (most-recent-first ordering)
    pub async fn insert(&self, employee: Employee) {
        self.inner.write().await.insert(0, employee);
    }

    /// Number of employees
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}
