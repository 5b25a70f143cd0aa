/// Wallet API routes
///
/// USDC balance and trading address of the bridge's wallet
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::clob::ClientHandle;
use crate::errors::BridgeError;
use crate::logger::{self, LogTag};
use crate::webserver::{models::BalanceResponse, state::AppState, utils::respond};

/// Create wallet routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/balance", get(get_balance))
}

pub async fn dispatch_balance(handle: &ClientHandle) -> Result<BalanceResponse, BridgeError> {
    let client = handle.get().await?;
    let usdc_balance = client.get_balance().await?;
    let address = client.get_address_for_private_key()?;

    logger::debug(
        LogTag::Client,
        &format!("Balance for {}: {} USDC", address, usdc_balance),
    );

    Ok(BalanceResponse {
        usdc_balance,
        address,
    })
}

/// GET /balance
async fn get_balance(State(state): State<Arc<AppState>>) -> Response {
    respond("get_balance", dispatch_balance(&state.client).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clob::{stub::StubClient, TradingClient};

    #[tokio::test]
    async fn test_balance_calls_both_capabilities() {
        let stub = Arc::new(StubClient::new().with_balance(42.5, "0xabc"));
        let handle = ClientHandle::from_client(stub.clone() as Arc<dyn TradingClient>);

        let response = dispatch_balance(&handle).await.unwrap();

        assert_eq!(
            response,
            BalanceResponse {
                usdc_balance: 42.5,
                address: "0xabc".to_string()
            }
        );
        assert_eq!(stub.calls(), vec!["get_balance", "get_address_for_private_key"]);
    }

    #[tokio::test]
    async fn test_balance_failure_is_operation_error() {
        let handle = ClientHandle::from_client(Arc::new(StubClient::new().failing("rpc timeout")));
        assert_eq!(
            dispatch_balance(&handle).await,
            Err(BridgeError::Operation("rpc timeout".to_string()))
        );
    }
}
