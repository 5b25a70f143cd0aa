/// Request bodies accepted by the bridge
use serde::{Deserialize, Serialize};

use crate::errors::BridgeError;

pub const PRICE_REQUIRED_MESSAGE: &str = "Price is required for limit orders";

/// Body of `POST /order/market` and `POST /order/limit`
///
/// `side` is expected to be `BUY` or `SELL` but is forwarded as given;
/// `token_id` and `amount` are not checked either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub token_id: String,
    pub side: String,
    pub amount: f64,
    /// Only used by limit orders
    #[serde(default)]
    pub price: Option<f64>,
}

impl OrderRequest {
    /// Limit orders need a price; returns it or the validation failure
    pub fn require_limit_price(&self) -> Result<f64, BridgeError> {
        self.price
            .ok_or_else(|| BridgeError::validation(PRICE_REQUIRED_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_optional_in_body() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"token_id":"T1","side":"BUY","amount":10}"#).unwrap();
        assert_eq!(request.price, None);
        assert_eq!(request.amount, 10.0);
    }

    #[test]
    fn test_null_price_counts_as_missing() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"token_id":"T1","side":"SELL","amount":1,"price":null}"#)
                .unwrap();
        assert_eq!(
            request.require_limit_price(),
            Err(BridgeError::Validation(PRICE_REQUIRED_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_permissive_fields_are_accepted() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"token_id":"","side":"buy","amount":-3,"price":0.4}"#)
                .unwrap();
        assert_eq!(request.side, "buy");
        assert_eq!(request.require_limit_price(), Ok(0.4));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        assert!(serde_json::from_str::<OrderRequest>(r#"{"side":"BUY","amount":1}"#).is_err());
    }
}
