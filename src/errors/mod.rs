/// Error taxonomy for the bridge
///
/// Every dispatcher returns `Result<_, BridgeError>`. The conversion into an
/// HTTP response happens once, in the `IntoResponse` impl below:
/// - `Validation` -> 400
/// - `Operation`  -> 500
///
/// Both carry the plain message, rendered as `{"detail": message}`. Failure
/// kinds coming out of the trading client (network, auth, malformed reply,
/// not found) are not distinguished.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// Caller-supplied request failed a pre-dispatch check
    #[error("{0}")]
    Validation(String),

    /// Anything raised by the trading client, including its construction
    #[error("{0}")]
    Operation(String),
}

impl BridgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        BridgeError::Validation(message.into())
    }

    pub fn operation(message: impl Into<String>) -> Self {
        BridgeError::Operation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            BridgeError::Validation(_) => StatusCode::BAD_REQUEST,
            BridgeError::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BridgeError::Validation(message) | BridgeError::Operation(message) => message,
        }
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate form keeps the whole context chain in one line
        BridgeError::Operation(format!("{:#}", err))
    }
}

/// Failure body returned to HTTP callers
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
