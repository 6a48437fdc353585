//! HTTP route handlers for the web interface.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! The home page gets a short public cache duration; the health endpoint is
//! never cached so liveness probes always reach the origin.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Home page - moderate cache, content changes on redeploy
    let home_routes = Router::new().route("/home", get(home::show)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
