use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{debug, error};

use crate::ErrorResponse;

/// Rewrites bodies of oversized-payload and server-error responses into the
/// shared `ErrorResponse` shape.
pub async fn error_handling_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let path = req.uri().path().to_owned();
    let method = req.method().clone();

    let response = next.run(req).await;

    let status = response.status();
    debug!(
        "Request completed: {} {} - Status: {} - Time: {:?}",
        method,
        path,
        status,
        start.elapsed()
    );

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error!("Request body too large: {} {}", method, path);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "The request body exceeds the maximum allowed size".to_string(),
            code: "PAYLOAD_TOO_LARGE".to_string(),
            details: Some("Please reduce the size of your request and try again".to_string()),
            help: None,
        };

        return (StatusCode::PAYLOAD_TOO_LARGE, Json(error_response)).into_response();
    }

    if status.is_server_error() {
        error!("Server error occurred: {} {} - {}", method, path, status);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "An internal server error occurred".to_string(),
            code: "SERVER_ERROR".to_string(),
            details: None,
            help: Some(
                "Please try again later or contact support if the issue persists".to_string(),
            ),
        };

        return (status, Json(error_response)).into_response();
    }

    response
}
