/// Response bodies and the normalization rules that build them
///
/// Raw records from the trading client are loosely typed. Normalization maps
/// their field names onto the bridge schema and applies one numeric rule
/// everywhere (orders, positions, orderbook spread): a JSON number is kept, a
/// string holding a real is parsed, anything else becomes `0`. Non-numeric
/// fields are passed through and are `null` when absent.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clob::RawRecord;

/// Numeric field of a raw record, defaulting to 0
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    // NaN/inf would serialize as null
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Pass-through field of a raw record, `null` when absent
pub fn passthrough(raw: &RawRecord, key: &str) -> Value {
    raw.get(key).cloned().unwrap_or(Value::Null)
}

/// Sequence field of a raw record, empty when absent or null
fn sequence_or_empty(raw: &RawRecord, key: &str) -> Value {
    match raw.get(key) {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(value) => value.clone(),
    }
}

// =============================================================================
// HEALTH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

// =============================================================================
// BALANCE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub usdc_balance: f64,
    pub address: String,
}

// =============================================================================
// ORDERS
// =============================================================================

/// Normalized open order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Value,
    pub market_id: Value,
    pub token_id: Value,
    pub side: Value,
    pub price: f64,
    pub size: f64,
    pub status: Value,
    pub timestamp: Value,
}

impl Order {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            id: passthrough(raw, "id"),
            market_id: passthrough(raw, "market"),
            token_id: passthrough(raw, "asset_id"),
            side: passthrough(raw, "side"),
            price: number_or_zero(raw.get("price")),
            size: number_or_zero(raw.get("size")),
            status: passthrough(raw, "status"),
            timestamp: passthrough(raw, "created_at"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub total: usize,
}

impl OrdersResponse {
    pub fn from_raw(records: &[RawRecord]) -> Self {
        let orders: Vec<Order> = records.iter().map(Order::from_raw).collect();
        Self {
            total: orders.len(),
            orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderResponse {
    pub success: bool,
    pub order_id: Value,
    pub status: Value,
    pub filled_amount: Value,
}

impl MarketOrderResponse {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            success: true,
            order_id: passthrough(raw, "id"),
            status: passthrough(raw, "status"),
            filled_amount: passthrough(raw, "filled_amount"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderResponse {
    pub success: bool,
    pub order_id: Value,
    pub status: Value,
}

impl LimitOrderResponse {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            success: true,
            order_id: passthrough(raw, "id"),
            status: passthrough(raw, "status"),
        }
    }
}

pub const CANCELLED_STATUS: &str = "cancelled";

/// Reply to a cancellation that did not fail
///
/// The client's own reply is not inspected: a call that returns without
/// error is reported as cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub success: bool,
    pub order_id: String,
    pub status: String,
}

impl CancelOrderResponse {
    pub fn cancelled(order_id: &str) -> Self {
        Self {
            success: true,
            order_id: order_id.to_string(),
            status: CANCELLED_STATUS.to_string(),
        }
    }
}

// =============================================================================
// POSITIONS
// =============================================================================

/// Normalized position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub token_id: Value,
    pub market: Value,
    pub side: Value,
    pub size: f64,
    pub value: f64,
    pub entry_price: f64,
    pub current_price: f64,
    pub pnl: f64,
}

impl Position {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            token_id: passthrough(raw, "asset_id"),
            market: passthrough(raw, "market"),
            side: passthrough(raw, "side"),
            size: number_or_zero(raw.get("size")),
            value: number_or_zero(raw.get("value")),
            entry_price: number_or_zero(raw.get("entry_price")),
            current_price: number_or_zero(raw.get("current_price")),
            pnl: number_or_zero(raw.get("pnl")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub positions: Vec<Position>,
    pub total: usize,
}

impl PositionsResponse {
    pub fn from_raw(records: &[RawRecord]) -> Self {
        let positions: Vec<Position> = records.iter().map(Position::from_raw).collect();
        Self {
            total: positions.len(),
            positions,
        }
    }
}

// =============================================================================
// MARKETS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookResponse {
    pub token_id: String,
    pub bids: Value,
    pub asks: Value,
    pub spread: f64,
}

impl OrderbookResponse {
    /// `token_id` is the one requested, not whatever the book reports
    pub fn from_raw(token_id: &str, raw: &RawRecord) -> Self {
        Self {
            token_id: token_id.to_string(),
            bids: sequence_or_empty(raw, "bids"),
            asks: sequence_or_empty(raw, "asks"),
            spread: number_or_zero(raw.get("spread")),
        }
    }
}
