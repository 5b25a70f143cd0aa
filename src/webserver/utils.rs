/// Response helpers shared by all routes
///
/// Dispatchers return `Result<T, BridgeError>`; `respond` is the single place
/// where that outcome becomes an HTTP response.
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{BridgeError, ErrorBody};
use crate::logger::{self, LogTag};

/// 200 with a JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Arbitrary status with the `{"detail": ...}` failure body
pub fn error_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

/// Translate a dispatcher outcome; `operation` names it in the logs
pub fn respond<T: Serialize>(operation: &str, result: Result<T, BridgeError>) -> Response {
    match result {
        Ok(data) => success_response(data),
        Err(err) => {
            match &err {
                BridgeError::Validation(message) => logger::warning(
                    LogTag::Webserver,
                    &format!("{} rejected: {}", operation, message),
                ),
                BridgeError::Operation(message) => logger::error(
                    LogTag::Webserver,
                    &format!("{} failed: {}", operation, message),
                ),
            }
            err.into_response()
        }
    }
}

/// Body that could not be decoded into the expected request type
///
/// Keeps axum's status (422 for a missing or mistyped field, 400 for broken
/// JSON, 415 for a wrong content type) with the usual failure body.
pub fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    let detail = rejection.body_text();
    logger::warning(
        LogTag::Webserver,
        &format!("Rejected request body ({}): {}", status.as_u16(), detail),
    );
    error_response(status, &detail)
}
