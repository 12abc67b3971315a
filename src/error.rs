use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Pool(#[from] r2d2::Error),
}

/// Coarse classification of an [`AppError`].
///
/// Every kind except `NotFound` renders as 400, so this is how callers
/// (and tests) tell a bad request apart from a failing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed body, unparsable id or query, failed field validation.
    Input,
    /// Any failure coming out of the database or its pool.
    Store,
    /// No route matched the request.
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::Input,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Database(_) | AppError::Pool(_) => ErrorKind::Store,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::BAD_REQUEST
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                StatusCode::BAD_REQUEST
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Messages shared between validation and tests.
pub mod msg {
    pub const PRICE_NEGATIVE: &str = "price must not be negative";
    pub const ROUTE_NOT_FOUND: &str = "route not found";
}
