pub mod products;

use axum::Router;

use crate::db::AppState;
use crate::error::{msg, AppError};

/// All API routes, versioned under `/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/v1", products::router())
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::NotFound(msg::ROUTE_NOT_FOUND.into())
}
