//! AssetDesk Server - Asset Management Dashboard
//!
//! REST API server for role-based asset management over an in-memory store.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetdesk_server::{
    api,
    config::AppConfig,
    seed,
    services::Services,
    store::Store,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!("assetdesk_server={},tower_http=debug", config.logging.level).into()
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AssetDesk Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create the store and load the fixed seed dataset
    let store = Store::new();
    seed::seed(&store).await;

    // Create services
    let services = Services::new(store, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        .route("/auth/logout", post(api::auth::logout))
        // End-user namespace
        .route("/user/dashboard", get(api::dashboard::user_dashboard))
        .route("/user/assets", get(api::assets::my_assets))
        .route("/user/requests", get(api::requests::my_requests))
        .route("/user/requests", post(api::requests::create_request))
        .route("/user/complaints", get(api::complaints::my_complaints))
        .route("/user/complaints", post(api::complaints::create_complaint))
        // Manager namespace
        .route("/manager/dashboard", get(api::dashboard::manager_dashboard))
        .route("/manager/employees", get(api::employees::list_employees))
        .route("/manager/employees", post(api::employees::create_employee))
        .route("/manager/assets", get(api::assets::manager_list_assets))
        .route("/manager/assets/:id/assign", post(api::assets::assign_asset))
        .route("/manager/inventory", get(api::assets::list_inventory))
        .route("/manager/inventory/:id/quantity", put(api::assets::adjust_quantity))
        .route("/manager/requests", get(api::requests::list_requests))
        .route("/manager/requests/:id/status", put(api::requests::update_request_status))
        .route("/manager/complaints", get(api::complaints::list_complaints))
        .route("/manager/complaints/:id/status", put(api::complaints::update_complaint_status))
        // Admin namespace
        .route("/admin/dashboard", get(api::dashboard::admin_dashboard))
        .route("/admin/assets", get(api::assets::admin_list_assets))
        .route("/admin/assets", post(api::assets::create_asset))
        .route("/admin/assets/:id", delete(api::assets::delete_asset))
        .route("/admin/categories", get(api::categories::list_categories))
        .route("/admin/categories", post(api::categories::create_category))
        .route("/admin/reports", get(api::reports::get_reports))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
