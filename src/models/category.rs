//! Category model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Asset category. The name is the display key assets tag by value; it is
/// not enforced unique and not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Create category request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
}
