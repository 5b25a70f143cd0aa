/// Webserver middleware
///
/// Request logging: method, path, status and latency of every request at
/// debug level (`--debug-webserver`).
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::logger::{self, LogTag};

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    logger::debug(
        LogTag::Webserver,
        &format!(
            "{} {} -> {} ({} ms)",
            method,
            path,
            response.status().as_u16(),
            started.elapsed().as_millis()
        ),
    );

    response
}
