use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(String),
    ValidationErrors(validator::ValidationErrors),
    Auth(AuthError),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ExternalService(String),
    Internal(String),
}

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    UnknownSession,
    ExpiredSession,
    InvalidOrExpiredToken,
    /// The sessions relation is absent, which means migrations were never
    /// applied. Distinguished from a bad credential so operators see the
    /// deployment defect instead of a generic 401.
    SessionsTableMissing,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "x-session-id header required"),
            AuthError::UnknownSession => write!(f, "Invalid session"),
            AuthError::ExpiredSession => write!(f, "Session expired"),
            AuthError::InvalidOrExpiredToken => write!(f, "Invalid or expired login token"),
            AuthError::SessionsTableMissing => write!(
                f,
                "Sessions table missing; run database migrations before serving traffic"
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::ValidationErrors(e) => write!(f, "Validation error: {}", e),
            ApiError::Auth(e) => write!(f, "Auth error: {}", e),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ExternalService(msg) => write!(f, "External service error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::ValidationErrors(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationErrors(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => {
                    (StatusCode::NOT_FOUND, "Record not found".to_string())
                }
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => (StatusCode::CONFLICT, "Record already exists".to_string()),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
            },
            ApiError::DatabaseConnection(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database unavailable".to_string(),
            ),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ValidationErrors(errors) => {
                (StatusCode::BAD_REQUEST, format!("Validation error: {}", errors))
            }
            ApiError::Auth(e) => match e {
                AuthError::SessionsTableMissing => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
                _ => (StatusCode::UNAUTHORIZED, e.to_string()),
            },
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::ExternalService(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream provider error".to_string(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = self.into();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
