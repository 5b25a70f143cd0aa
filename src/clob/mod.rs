//! Trading client seam
//!
//! The bridge never talks to the venue itself. Every operation goes through
//! a `TradingClient`, an opaque capability that owns credentials, signing and
//! transport. Records come back as raw JSON; shaping them into the bridge's
//! response schema is the webserver's job.

mod auth;
mod handle;
mod rest;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use serde_json::Value;

pub use auth::{build_hmac_signature, ApiCredentials};
pub use handle::{ClientFactory, ClientHandle};
pub use rest::ClobRestClient;

/// Raw record as returned by the trading client (order, position, book...)
pub type RawRecord = Value;

/// Capability exposed by the external trading client
///
/// Any method may fail; the error text is what HTTP callers eventually see.
#[async_trait]
pub trait TradingClient: Send + Sync {
    /// USDC balance of the trading wallet
    async fn get_balance(&self) -> anyhow::Result<f64>;

    /// Address the client trades from
    fn get_address_for_private_key(&self) -> anyhow::Result<String>;

    /// Open orders, one raw record each
    async fn get_orders(&self) -> anyhow::Result<Vec<RawRecord>>;

    /// Current positions, one raw record each
    async fn get_positions(&self) -> anyhow::Result<Vec<RawRecord>>;

    async fn place_market_order(
        &self,
        token_id: &str,
        side: &str,
        amount: f64,
    ) -> anyhow::Result<RawRecord>;

    async fn place_limit_order(
        &self,
        token_id: &str,
        side: &str,
        amount: f64,
        price: f64,
    ) -> anyhow::Result<RawRecord>;

    async fn cancel_order(&self, order_id: &str) -> anyhow::Result<RawRecord>;

    async fn get_order_book(&self, token_id: &str) -> anyhow::Result<RawRecord>;
}
