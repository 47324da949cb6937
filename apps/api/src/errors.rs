use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Generation-service failures never show up here: the roadmap generator
/// downgrades them to a fixed fallback string before a handler sees them.
/// Anything else that goes wrong in a handler is a panic, answered by
/// `panic_response`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", &msg)
            }
        }
    }
}

/// Maps a handler panic to a 500 `INTERNAL_ERROR` carrying the panic message.
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {message}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", &message)
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }));

    (status, body).into_response()
}
