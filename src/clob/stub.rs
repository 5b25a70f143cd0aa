//! In-memory `TradingClient` for tests
//!
//! Replies are canned; every call is recorded so tests can assert which
//! capability was (or was not) invoked.
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use super::{RawRecord, TradingClient};

pub(crate) struct StubClient {
    balance: f64,
    address: String,
    orders: Vec<Value>,
    positions: Vec<Value>,
    order_reply: Value,
    cancel_reply: Value,
    book: Value,
    failure: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub(crate) fn new() -> Self {
        Self {
            balance: 0.0,
            address: "0x0000000000000000000000000000000000000000".to_string(),
            orders: Vec::new(),
            positions: Vec::new(),
            order_reply: json!({}),
            cancel_reply: json!({}),
            book: json!({}),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_balance(mut self, balance: f64, address: &str) -> Self {
        self.balance = balance;
        self.address = address.to_string();
        self
    }

    pub(crate) fn with_orders(mut self, orders: Vec<Value>) -> Self {
        self.orders = orders;
        self
    }

    pub(crate) fn with_positions(mut self, positions: Vec<Value>) -> Self {
        self.positions = positions;
        self
    }

    pub(crate) fn with_order_reply(mut self, reply: Value) -> Self {
        self.order_reply = reply;
        self
    }

    pub(crate) fn with_cancel_reply(mut self, reply: Value) -> Self {
        self.cancel_reply = reply;
        self
    }

    pub(crate) fn with_book(mut self, book: Value) -> Self {
        self.book = book;
        self
    }

    /// Every call fails with `message`
    pub(crate) fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TradingClient for StubClient {
    async fn get_balance(&self) -> Result<f64> {
        self.record("get_balance".to_string())?;
        Ok(self.balance)
    }

    fn get_address_for_private_key(&self) -> Result<String> {
        self.record("get_address_for_private_key".to_string())?;
        Ok(self.address.clone())
    }

    async fn get_orders(&self) -> Result<Vec<RawRecord>> {
        self.record("get_orders".to_string())?;
        Ok(self.orders.clone())
    }

    async fn get_positions(&self) -> Result<Vec<RawRecord>> {
        self.record("get_positions".to_string())?;
        Ok(self.positions.clone())
    }

    async fn place_market_order(&self, token_id: &str, side: &str, amount: f64) -> Result<RawRecord> {
        self.record(format!("place_market_order({},{},{})", token_id, side, amount))?;
        Ok(self.order_reply.clone())
    }

    async fn place_limit_order(
        &self,
        token_id: &str,
        side: &str,
        amount: f64,
        price: f64,
    ) -> Result<RawRecord> {
        self.record(format!(
            "place_limit_order({},{},{},{})",
            token_id, side, amount, price
        ))?;
        Ok(self.order_reply.clone())
    }

    async fn cancel_order(&self, order_id: &str) -> Result<RawRecord> {
        self.record(format!("cancel_order({})", order_id))?;
        Ok(self.cancel_reply.clone())
    }

    async fn get_order_book(&self, token_id: &str) -> Result<RawRecord> {
        self.record(format!("get_order_book({})", token_id))?;
        Ok(self.book.clone())
    }
}
