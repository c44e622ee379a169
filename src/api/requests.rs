//! Asset request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::request::{AssetRequest, CreateAssetRequest, UpdateRequestStatus},
};

use super::AuthenticatedUser;

/// List the current identity's requests, most recent first
#[utoipa::path(
    get,
    path = "/user/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Requests filed by the current identity", body = [AssetRequest]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn my_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<AssetRequest>>> {
    claims.require_user()?;

    Ok(Json(state.services.requests.list_for_user(&claims.user_id).await))
}

/// File a new asset request
#[utoipa::path(
    post,
    path = "/user/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Request filed", body = AssetRequest),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateAssetRequest>,
) -> AppResult<(StatusCode, Json<AssetRequest>)> {
    claims.require_user()?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = state.services.requests.create(&claims, payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List all requests (manager view)
#[utoipa::path(
    get,
    path = "/manager/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All requests", body = [AssetRequest]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<AssetRequest>>> {
    claims.require_manager()?;

    Ok(Json(state.services.requests.list().await))
}

/// Approve or reject a pending request
#[utoipa::path(
    put,
    path = "/manager/requests/{id}/status",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Request ID")
    ),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Request updated", body = AssetRequest),
        (status = 400, description = "Invalid transition"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_request_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRequestStatus>,
) -> AppResult<Json<AssetRequest>> {
    claims.require_manager()?;

    let request = state.services.requests.set_status(&id, payload.status).await?;
    Ok(Json(request))
}
