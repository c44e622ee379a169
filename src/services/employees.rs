//! Employee management service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::employee::{CreateEmployee, Employee},
    store::Store,
};

#[derive(Clone)]
pub struct EmployeesService {
    store: Store,
}

impl EmployeesService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All employees, most recent first
    pub async fn list(&self) -> Vec<Employee> {
        self.store.employees.list().await
    }

    /// Add an employee record. This does not create a loginable identity;
    /// the two collections are deliberately unlinked.
    pub async fn add(&self, payload: CreateEmployee) -> AppResult<Employee> {
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            department: payload.department,
            role: payload.role,
            avatar: payload.avatar,
            created_at: Utc::now(),
        };
        self.store.employees.insert(employee.clone()).await;
        tracing::info!(employee_id = %employee.id, "Employee added");
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    #[tokio::test]
    async fn add_prepends_and_creates_no_identity() {
        let store = Store::new();
        let svc = EmployeesService::new(store.clone());

        let employee = svc
            .add(CreateEmployee {
                first_name: "Grace".to_string(),
                last_name: "Ito".to_string(),
                email: "grace@example.com".to_string(),
                department: "Design".to_string(),
                role: Role::User,
                avatar: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(svc.list().await[0].id, employee.id);
        assert!(store.users.find_by_email("grace@example.com").await.is_none());
    }
}
