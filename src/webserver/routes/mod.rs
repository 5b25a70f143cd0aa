use crate::webserver::{state::AppState, utils::error_response};
use axum::{http::StatusCode, response::Response, Router};
use std::sync::Arc;

pub mod markets;
pub mod positions;
pub mod status;
pub mod trading;
pub mod wallet;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(status::routes())
        .merge(wallet::routes())
        .merge(trading::routes())
        .merge(positions::routes())
        .merge(markets::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// Unknown paths get the same failure body as every other error
async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
