//! Error types for AssetDesk server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in every error response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NoSuchRecord = 3,
    BadValue = 4,
    InvalidTransition = 5,
    AssetNotAvailable = 6,
    AssetAssigned = 7,
    InsufficientQuantity = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Asset not available: {0}")]
    AssetNotAvailable(String),

    #[error("Asset assigned: {0}")]
    AssetAssigned(String),

    #[error("Insufficient quantity: {0}")]
    InsufficientQuantity(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Authorization(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::InvalidTransition(_)
            | AppError::InsufficientQuantity(_) => StatusCode::BAD_REQUEST,
            AppError::AssetNotAvailable(_) | AppError::AssetAssigned(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric code carried in the response body
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Authentication(_) | AppError::Authorization(_) => ErrorCode::NotAuthorized,
            AppError::NotFound(_) => ErrorCode::NoSuchRecord,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            AppError::AssetNotAvailable(_) => ErrorCode::AssetNotAvailable,
            AppError::AssetAssigned(_) => ErrorCode::AssetAssigned,
            AppError::InsufficientQuantity(_) => ErrorCode::InsufficientQuantity,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Authentication(msg)
            | AppError::Authorization(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::InvalidTransition(msg)
            | AppError::AssetNotAvailable(msg)
            | AppError::AssetAssigned(msg)
            | AppError::InsufficientQuantity(msg) => msg,
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_causes_carry_distinct_codes() {
        let assigned = AppError::AssetAssigned("a1".to_string());
        let unavailable = AppError::AssetNotAvailable("a1".to_string());

        assert_eq!(assigned.status(), StatusCode::CONFLICT);
        assert_eq!(unavailable.status(), StatusCode::CONFLICT);
        assert_ne!(assigned.code(), unavailable.code());
    }

    #[test]
    fn every_code_is_reachable_from_a_variant() {
        let cases = [
            (AppError::Internal("x".to_string()), ErrorCode::Failure),
            (AppError::Authentication("x".to_string()), ErrorCode::NotAuthorized),
            (AppError::NotFound("x".to_string()), ErrorCode::NoSuchRecord),
            (AppError::Validation("x".to_string()), ErrorCode::BadValue),
            (
                AppError::InvalidTransition("x".to_string()),
                ErrorCode::InvalidTransition,
            ),
            (
                AppError::AssetNotAvailable("x".to_string()),
                ErrorCode::AssetNotAvailable,
            ),
            (AppError::AssetAssigned("x".to_string()), ErrorCode::AssetAssigned),
            (
                AppError::InsufficientQuantity("x".to_string()),
                ErrorCode::InsufficientQuantity,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }
}
