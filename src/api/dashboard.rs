//! Role landing-page dashboards

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::asset::Asset};

use super::AuthenticatedUser;

/// End-user landing page counters
#[derive(Serialize, ToSchema)]
pub struct UserDashboard {
    /// Assets assigned to the identity
    pub assets: i64,
    /// Own requests still pending
    pub pending_requests: i64,
    /// Own complaints not yet resolved
    pub open_complaints: i64,
}

/// Manager landing page counters
#[derive(Serialize, ToSchema)]
pub struct ManagerDashboard {
    pub total_assets: i64,
    pub assigned_assets: i64,
    pub available_assets: i64,
    pub employees: i64,
    pub pending_requests: i64,
    /// Complaints that are open or in progress
    pub open_complaints: i64,
    /// Assets below the low-stock threshold
    pub low_stock: i64,
}

/// Admin landing page summary
#[derive(Serialize, ToSchema)]
pub struct AdminDashboard {
    pub total_assets: i64,
    pub employees: i64,
    pub categories: i64,
    /// Assets below the low-stock threshold
    pub low_stock: Vec<Asset>,
    pub by_category: Vec<CategoryBreakdown>,
}

/// Per-category asset usage
#[derive(Serialize, ToSchema)]
pub struct CategoryBreakdown {
    pub name: String,
    pub total: i64,
    pub available: i64,
    pub assigned: i64,
}

/// End-user dashboard
#[utoipa::path(
    get,
    path = "/user/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User dashboard", body = UserDashboard),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn user_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserDashboard>> {
    claims.require_user()?;

    let dashboard = state.services.stats.user_dashboard(&claims.user_id).await?;
    Ok(Json(dashboard))
}

/// Manager dashboard
#[utoipa::path(
    get,
    path = "/manager/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Manager dashboard", body = ManagerDashboard),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn manager_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ManagerDashboard>> {
    claims.require_manager()?;

    let dashboard = state.services.stats.manager_dashboard().await?;
    Ok(Json(dashboard))
}

/// Admin dashboard
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboard),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn admin_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<AdminDashboard>> {
    claims.require_admin()?;

    let dashboard = state.services.stats.admin_dashboard().await?;
    Ok(Json(dashboard))
}
