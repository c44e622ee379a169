//! Complaint model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Complaint status. The three values are freely settable in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reported problem against an asset.
///
/// `asset_name` is snapshotted at creation time so the complaint stays
/// self-describing even if the asset is later deleted; `asset_id` is a weak
/// reference with no cascading delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Complaint {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub asset_id: String,
    pub asset_name: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub date: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create complaint payload (end user)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComplaint {
    #[validate(length(min = 1, message = "Asset id is required"))]
    pub asset_id: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Status update payload (manager)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateComplaintStatus {
    pub status: ComplaintStatus,
}
