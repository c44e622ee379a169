//! Admin reports endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Full report for the admin reports page
#[derive(Serialize, ToSchema)]
pub struct ReportsResponse {
    pub generated_at: DateTime<Utc>,
    pub totals: ReportTotals,
    pub assets_by_status: Vec<StatEntry>,
    pub assets_by_category: Vec<CategoryShare>,
    pub requests_by_status: Vec<StatEntry>,
    pub complaints_by_status: Vec<StatEntry>,
}

/// Headline totals
#[derive(Serialize, ToSchema)]
pub struct ReportTotals {
    pub assets: i64,
    pub employees: i64,
    pub requests: i64,
    pub complaints: i64,
    /// Sum of purchase prices over all assets
    pub total_asset_value: f64,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Share of assets carrying a given category name
#[derive(Serialize, ToSchema)]
pub struct CategoryShare {
    pub name: String,
    pub count: i64,
    pub percentage: f64,
}

/// Generate the admin report
#[utoipa::path(
    get,
    path = "/admin/reports",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Report", body = ReportsResponse),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn get_reports(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ReportsResponse>> {
    claims.require_admin()?;

    let report = state.services.stats.reports().await?;
    Ok(Json(report))
}
