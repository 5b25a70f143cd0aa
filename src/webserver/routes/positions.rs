/// Positions API routes
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::clob::ClientHandle;
use crate::errors::BridgeError;
use crate::logger::{self, LogTag};
use crate::webserver::{models::PositionsResponse, state::AppState, utils::respond};

/// Create positions routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/positions", get(get_positions))
}

pub async fn dispatch_positions(handle: &ClientHandle) -> Result<PositionsResponse, BridgeError> {
    let client = handle.get().await?;
    let records = client.get_positions().await?;

    logger::debug(
        LogTag::Client,
        &format!("Fetched {} positions", records.len()),
    );

    Ok(PositionsResponse::from_raw(&records))
}

/// GET /positions
async fn get_positions(State(state): State<Arc<AppState>>) -> Response {
    respond("get_positions", dispatch_positions(&state.client).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clob::{stub::StubClient, TradingClient};
    use serde_json::json;

    #[tokio::test]
    async fn test_positions_are_normalized() {
        let stub = Arc::new(StubClient::new().with_positions(vec![
            json!({"asset_id": "T1", "market": "0xm", "side": "BUY", "size": "12.5", "pnl": 1.25}),
            json!({"asset_id": "T2"}),
        ]));
        let handle = ClientHandle::from_client(stub.clone() as Arc<dyn TradingClient>);

        let response = dispatch_positions(&handle).await.unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.positions[0].token_id, json!("T1"));
        assert_eq!(response.positions[0].size, 12.5);
        assert_eq!(response.positions[0].pnl, 1.25);
        assert_eq!(response.positions[1].current_price, 0.0);
        assert_eq!(stub.calls(), vec!["get_positions"]);
    }

    #[tokio::test]
    async fn test_empty_positions() {
        let handle = ClientHandle::from_client(Arc::new(StubClient::new()));
        let response = dispatch_positions(&handle).await.unwrap();
        assert!(response.positions.is_empty());
        assert_eq!(response.total, 0);
    }
}
