use axum::{http::StatusCode, response::IntoResponse};

use crate::error::RouteError;

/// Unknown paths go straight to the root boundary.
pub async fn not_found() -> impl IntoResponse {
    RouteError::status(StatusCode::NOT_FOUND, "Not Found")
}
