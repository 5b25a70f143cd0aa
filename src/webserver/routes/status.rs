use axum::{response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    config::with_config,
    logger::{self, LogTag},
    webserver::{models::HealthResponse, state::AppState, utils::success_response},
};

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Fixed health body; does not touch the trading client
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        service: with_config(|cfg| cfg.server.service_name.clone()),
    }
}

/// GET /health
async fn health_check() -> Response {
    logger::debug(LogTag::Webserver, "Health check endpoint called");
    success_response(health())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SERVICE_NAME;

    #[test]
    fn test_health_reports_configured_service_name() {
        let body = health();
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, DEFAULT_SERVICE_NAME);
        assert_eq!(body.service, "polymarket-clob-bridge");
    }
}
