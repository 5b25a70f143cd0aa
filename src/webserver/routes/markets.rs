/// Market data routes
///
/// Orderbook snapshot for a single outcome token
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::clob::ClientHandle;
use crate::errors::BridgeError;
use crate::logger::{self, LogTag};
use crate::webserver::{models::OrderbookResponse, state::AppState, utils::respond};

/// Create market routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/markets/:token_id/orderbook", get(get_orderbook))
}

pub async fn dispatch_orderbook(
    handle: &ClientHandle,
    token_id: &str,
) -> Result<OrderbookResponse, BridgeError> {
    let client = handle.get().await?;
    let book = client.get_order_book(token_id).await?;
    let response = OrderbookResponse::from_raw(token_id, &book);

    logger::verbose(
        LogTag::Client,
        &format!(
            "Orderbook {}: {} bids, {} asks, spread {}",
            token_id,
            response.bids.as_array().map(|b| b.len()).unwrap_or(0),
            response.asks.as_array().map(|a| a.len()).unwrap_or(0),
            response.spread
        ),
    );

    Ok(response)
}

/// GET /markets/:token_id/orderbook
async fn get_orderbook(
    State(state): State<Arc<AppState>>,
    Path(token_id): Path<String>,
) -> Response {
    respond(
        "get_orderbook",
        dispatch_orderbook(&state.client, &token_id).await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clob::{stub::StubClient, TradingClient};
    use serde_json::json;

    #[tokio::test]
    async fn test_orderbook_uses_requested_token() {
        let stub = Arc::new(StubClient::new().with_book(json!({
            "asset_id": "ignored",
            "bids": [{"price": "0.40", "size": "100"}],
            "asks": [{"price": "0.45", "size": "50"}],
            "spread": 0.05
        })));
        let handle = ClientHandle::from_client(stub.clone() as Arc<dyn TradingClient>);

        let response = dispatch_orderbook(&handle, "T1").await.unwrap();

        assert_eq!(response.token_id, "T1");
        assert_eq!(response.bids, json!([{"price": "0.40", "size": "100"}]));
        assert_eq!(response.spread, 0.05);
        assert_eq!(stub.calls(), vec!["get_order_book(T1)"]);
    }

    #[tokio::test]
    async fn test_unknown_token_failure_propagates() {
        let handle = ClientHandle::from_client(Arc::new(StubClient::new().failing("No orderbook exists")));
        assert_eq!(
            dispatch_orderbook(&handle, "nope").await,
            Err(BridgeError::Operation("No orderbook exists".to_string()))
        );
    }
}
