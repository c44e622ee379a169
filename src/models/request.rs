//! Asset request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request status. Pending is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ask by an identity for a new asset, subject to manager approval.
///
/// `user_name` is a snapshot of the requester's display name at creation
/// time, kept deliberately (point-in-time audit convenience).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetRequest {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    /// Free-text category of equipment requested
    pub asset_type: String,
    pub reason: String,
    pub status: RequestStatus,
    pub date: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create request payload (end user)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, message = "Asset type is required"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
}

/// Status update payload (manager)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
}
