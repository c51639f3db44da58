use axum::response::{IntoResponse, Response};
use std::any::Any;

use super::AppError;

/// Fallback for unmatched routes.
///
/// Also installed as the method fallback, so a known path requested with an
/// unrouted method answers the same 404.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Turns a handler panic into a formatted 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::internal(format!("panic: {}", detail)).into_response()
}
