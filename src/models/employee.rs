//! Employee model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::user::Role;

/// An employee record managed by managers.
///
/// Employees and loginable identities are the same logical set conceptually
/// but are kept as separate collections; adding an employee does not create
/// a loginable identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: Role,
    /// Avatar image URI
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Create employee request (manager only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    pub role: Role,
    pub avatar: String,
}
