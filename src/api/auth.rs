//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, PublicUser},
};

use super::AuthenticatedUser;

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token the client keeps to survive reloads
    pub token: String,
    pub token_type: String,
    pub user: PublicUser,
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (token, user) = state
        .services
        .auth
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user,
    }))
}

/// Get the current identity behind the bearer token
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current identity", body = PublicUser),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<PublicUser>> {
    let user = state.services.auth.current_user(&claims).await?;
    Ok(Json(user))
}

/// Log out. Tokens are stateless; this acknowledges the client discarding
/// its stored identity.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Logged out")
    )
)]
pub async fn logout(AuthenticatedUser(claims): AuthenticatedUser) -> StatusCode {
    tracing::info!(user_id = %claims.user_id, "User logged out");
    StatusCode::NO_CONTENT
}
