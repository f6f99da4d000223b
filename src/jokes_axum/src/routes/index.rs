use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::views::{HomePage, render};

pub async fn index() -> Response {
    match render(StatusCode::OK, &HomePage) {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
