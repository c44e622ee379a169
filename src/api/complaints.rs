//! Complaint endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::complaint::{Complaint, CreateComplaint, UpdateComplaintStatus},
};

use super::AuthenticatedUser;

/// List the current identity's complaints, most recent first
#[utoipa::path(
    get,
    path = "/user/complaints",
    tag = "complaints",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Complaints filed by the current identity", body = [Complaint]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn my_complaints(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Complaint>>> {
    claims.require_user()?;

    Ok(Json(state.services.complaints.list_for_user(&claims.user_id).await))
}

/// File a complaint against an existing asset
#[utoipa::path(
    post,
    path = "/user/complaints",
    tag = "complaints",
    security(("bearer_auth" = [])),
    request_body = CreateComplaint,
    responses(
        (status = 201, description = "Complaint filed", body = Complaint),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn create_complaint(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateComplaint>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    claims.require_user()?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = state.services.complaints.create(&claims, payload).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// List all complaints (manager view)
#[utoipa::path(
    get,
    path = "/manager/complaints",
    tag = "complaints",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All complaints", body = [Complaint]),
        (status = 403, description = "Wrong role")
    )
)]
pub async fn list_complaints(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Complaint>>> {
    claims.require_manager()?;

    Ok(Json(state.services.complaints.list().await))
}

/// Set a complaint's status
#[utoipa::path(
    put,
    path = "/manager/complaints/{id}/status",
    tag = "complaints",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintStatus,
    responses(
        (status = 200, description = "Complaint updated", body = Complaint),
        (status = 404, description = "Complaint not found")
    )
)]
pub async fn update_complaint_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateComplaintStatus>,
) -> AppResult<Json<Complaint>> {
    claims.require_manager()?;

    let complaint = state
        .services
        .complaints
        .set_status(&id, payload.status)
        .await?;
    Ok(Json(complaint))
}
