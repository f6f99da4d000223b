use std::time::Duration;

use axum::{extract::Request, response::Response};
use ::tracing::{Level, Span};

pub fn make_span_with_request_id(request: &Request) -> Span {
    let request_id = uuid::Uuid::new_v4();

    ::tracing::span!(
        Level::INFO,
        "[REQUEST]",
        method = ::tracing::field::display(request.method()),
        uri = ::tracing::field::display(request.uri()),
        version = ::tracing::field::debug(request.version()),
        request_id = ::tracing::field::display(request_id),
    )
}

pub fn on_request(_request: &Request, _span: &Span) {
    ::tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    let status_code = status.as_u16();

    // 4xx pages are part of normal flow here (bad forms, missing jokes)
    match status_code / 100 {
        5 => {
            ::tracing::event!(
                Level::ERROR,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
        4 => {
            ::tracing::event!(
                Level::WARN,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
        _ => {
            ::tracing::event!(
                Level::INFO,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
    }
}
