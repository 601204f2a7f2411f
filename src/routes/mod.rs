//! HTTP route handlers.
//!
//! A single route is registered: `GET /` returns the greeting. Everything
//! else, unknown paths and unsupported methods alike, resolves to 404.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod greeting;

use axum::{middleware, routing::get, Router};
use http::StatusCode;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_layer;

/// Fallback handler for unmatched paths and methods.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    // The method-level fallback keeps non-GET requests to "/" on the same
    // 404 path as unknown routes instead of axum's 405 default.
    Router::new()
        .route("/", get(greeting::index).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
