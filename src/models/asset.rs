//! Asset model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Asset status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Available,
    Assigned,
    Maintenance,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "available",
            AssetStatus::Assigned => "assigned",
            AssetStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of equipment tracked by the system, assignable to at most one
/// identity at a time.
///
/// Invariant: `assigned_to` is set if and only if `status` is `Assigned`,
/// and `assigned_at` is set if and only if `assigned_to` is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Category display name (by value; not a foreign key)
    pub category: String,
    pub serial_number: String,
    /// Units in stock; tracked independently from assignment
    pub quantity: i32,
    pub purchase_price: f64,
    /// Image URI
    pub image: String,
    pub status: AssetStatus,
    pub assigned_to: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Check the assignment invariant on this record
    pub fn assignment_consistent(&self) -> bool {
        match self.status {
            AssetStatus::Assigned => self.assigned_to.is_some() && self.assigned_at.is_some(),
            _ => self.assigned_to.is_none() && self.assigned_at.is_none(),
        }
    }
}

/// Create asset request (admin only). Status is always forced to available.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub serial_number: String,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
    #[validate(range(min = 0.0, message = "Purchase price must not be negative"))]
    pub purchase_price: f64,
    pub image: String,
}

/// Assign asset request (manager only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignAsset {
    /// Identity id the asset is assigned to
    pub user_id: String,
}

/// Stock adjustment request (manager inventory)
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustQuantity {
    /// Signed delta added to the current quantity
    pub delta: i32,
}
