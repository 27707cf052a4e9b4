//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use postboard_app::AppError;
use postboard_domain::{DomainError, RepositoryError, TokenError};

/// Gateway error types, mapped onto HTTP statuses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A value-object constraint was violated; the message names it.
    #[error("{0}")]
    ValidationFailed(String),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON body rendered for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: status.as_str().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::Validation(message)) => {
                ApiError::ValidationFailed(message)
            }
            AppError::Domain(DomainError::Hashing(message)) => ApiError::InternalError(message),
            AppError::Repository(e) => ApiError::DatabaseError(e.to_string()),
            AppError::Token(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        ApiError::DatabaseError(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::AuthenticationFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let err = ApiError::from(AppError::Domain(DomainError::Validation(
            "username is too short".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "username is too short");
    }

    #[test]
    fn persistence_errors_map_to_500() {
        let err = ApiError::from(AppError::Repository(RepositoryError::Database(
            "disk full".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn token_errors_map_to_401_at_the_middleware() {
        let err = ApiError::from(TokenError::MissingSubject);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
