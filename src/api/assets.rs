//! Asset endpoints across the three role namespaces

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::asset::{AdjustQuantity, Asset, AssignAsset, CreateAsset},
};

use super::AuthenticatedUser;

/// List the assets assigned to the current identity
#[utoipa::path(
    get,
    path = "/user/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Assets assigned to the current identity", body = [Asset]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn my_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    claims.require_user()?;

    let assets = state.services.assets.list_for_user(&claims.user_id).await;
    Ok(Json(assets))
}

/// List all assets (manager view)
#[utoipa::path(
    get,
    path = "/manager/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assets", body = [Asset]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn manager_list_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    claims.require_manager()?;

    Ok(Json(state.services.assets.list().await))
}

/// Assign an available asset to an identity
#[utoipa::path(
    post,
    path = "/manager/assets/{id}/assign",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    request_body = AssignAsset,
    responses(
        (status = 200, description = "Asset assigned", body = Asset),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Asset not available")
    )
)]
pub async fn assign_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<AssignAsset>,
) -> AppResult<Json<Asset>> {
    claims.require_manager()?;

    let asset = state.services.assets.assign(&id, &payload.user_id).await?;
    Ok(Json(asset))
}

/// List all assets with stock levels (manager inventory view)
#[utoipa::path(
    get,
    path = "/manager/inventory",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assets", body = [Asset]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    claims.require_manager()?;

    Ok(Json(state.services.assets.list().await))
}

/// Adjust an asset's stock by a signed delta
#[utoipa::path(
    put,
    path = "/manager/inventory/{id}/quantity",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    request_body = AdjustQuantity,
    responses(
        (status = 200, description = "Quantity updated", body = Asset),
        (status = 400, description = "Delta would drive quantity negative"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn adjust_quantity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<AdjustQuantity>,
) -> AppResult<Json<Asset>> {
    claims.require_manager()?;

    let asset = state
        .services
        .assets
        .adjust_quantity(&id, payload.delta)
        .await?;
    Ok(Json(asset))
}

/// List all assets (admin view)
#[utoipa::path(
    get,
    path = "/admin/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assets", body = [Asset]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn admin_list_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    claims.require_admin()?;

    Ok(Json(state.services.assets.list().await))
}

/// Add a new asset (always created available)
#[utoipa::path(
    post,
    path = "/admin/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    claims.require_admin()?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let asset = state.services.assets.add_asset(payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Delete an asset permanently
#[utoipa::path(
    delete,
    path = "/admin/assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Asset is assigned")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;

    state.services.assets.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
