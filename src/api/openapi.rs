//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    assets, auth, categories, complaints, dashboard, employees, health, reports, requests,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AssetDesk API",
        version = "0.1.0",
        description = "Role-based asset management dashboard REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        auth::logout,
        // User namespace
        dashboard::user_dashboard,
        assets::my_assets,
        requests::my_requests,
        requests::create_request,
        complaints::my_complaints,
        complaints::create_complaint,
        // Manager namespace
        dashboard::manager_dashboard,
        employees::list_employees,
        employees::create_employee,
        assets::manager_list_assets,
        assets::assign_asset,
        assets::list_inventory,
        assets::adjust_quantity,
        requests::list_requests,
        requests::update_request_status,
        complaints::list_complaints,
        complaints::update_complaint_status,
        // Admin namespace
        dashboard::admin_dashboard,
        assets::admin_list_assets,
        assets::create_asset,
        assets::delete_asset,
        categories::list_categories,
        categories::create_category,
        reports::get_reports,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::PublicUser,
            crate::models::user::Role,
            auth::LoginResponse,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::AssetStatus,
            crate::models::asset::CreateAsset,
            crate::models::asset::AssignAsset,
            crate::models::asset::AdjustQuantity,
            // Requests
            crate::models::request::AssetRequest,
            crate::models::request::RequestStatus,
            crate::models::request::CreateAssetRequest,
            crate::models::request::UpdateRequestStatus,
            // Complaints
            crate::models::complaint::Complaint,
            crate::models::complaint::ComplaintStatus,
            crate::models::complaint::CreateComplaint,
            crate::models::complaint::UpdateComplaintStatus,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            // Dashboards & reports
            dashboard::UserDashboard,
            dashboard::ManagerDashboard,
            dashboard::AdminDashboard,
            dashboard::CategoryBreakdown,
            reports::ReportsResponse,
            reports::ReportTotals,
            reports::StatEntry,
            reports::CategoryShare,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "dashboard", description = "Role landing-page dashboards"),
        (name = "assets", description = "Asset management"),
        (name = "requests", description = "Asset requests"),
        (name = "complaints", description = "Complaints"),
        (name = "employees", description = "Employee management"),
        (name = "categories", description = "Asset categories"),
        (name = "reports", description = "Admin reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
