//! Request ID middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and a tracing span covering its whole
//! lifecycle, so every log line emitted while handling it carries the same
//! request_id field.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID stored in request extensions for handlers that need it.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns a request ID and wraps the request in a span.
///
/// Must be the outermost layer so the span covers all other middleware
/// and the handler itself.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));
    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let span = tracing::Span::current();
        span.record("status", response.status().as_u16());
        span.record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
