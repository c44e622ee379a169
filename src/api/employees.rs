//! Employee endpoints (manager namespace)

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee},
};

use super::AuthenticatedUser;

/// List all employees, most recent first
#[utoipa::path(
    get,
    path = "/manager/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Employee>>> {
    claims.require_manager()?;

    Ok(Json(state.services.employees.list().await))
}

/// Add an employee record (does not create a loginable identity)
#[utoipa::path(
    post,
    path = "/manager/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee added", body = Employee),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    claims.require_manager()?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let employee = state.services.employees.add(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}
